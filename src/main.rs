use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use regulation_extractor::settings::Settings;
use regulation_extractor::{output, process_document, segment, ReverseSummarizer};

#[derive(Parser)]
#[command(
    name = "regulation_extractor",
    about = "Extract sections from a regulations file and summarize each one"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract sections, summarize them and save the results (.json or .csv)
    Extract {
        /// Path to the regulations text file
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Path to the output file; the extension picks the format
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the sections found in the input without summarizing
    Sections {
        /// Path to the regulations text file
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;

    let result = match cli.command {
        Commands::Extract { input, output } => {
            let settings = settings.with_overrides(input, output);
            run_extract(&settings)
        }
        Commands::Sections { input, limit } => {
            let settings = settings.with_overrides(input, None);
            run_sections(&settings, limit)
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn run_extract(settings: &Settings) -> anyhow::Result<()> {
    let format = settings.validate()?;
    output::clear_previous(&settings.output_filename)?;

    let text = read_input(settings)?;
    let records = process_document(&text, &ReverseSummarizer)?;

    output::write(&settings.output_filename, &records).with_context(|| {
        format!("failed to write {}", settings.output_filename.display())
    })?;
    info!(?format, "extraction finished");
    println!(
        "Saved {} sections to {}",
        records.len(),
        settings.output_filename.display()
    );
    Ok(())
}

fn run_sections(settings: &Settings, limit: usize) -> anyhow::Result<()> {
    let text = read_input(settings)?;
    let sections = segment(&text);
    if sections.is_empty() {
        println!("No sections found.");
        return Ok(());
    }

    println!("{:>3} | {:>6} | {:>6} | {:<50}", "#", "Id", "Chars", "Preview");
    println!("{}", "-".repeat(75));
    for (i, s) in sections.iter().take(limit).enumerate() {
        let preview = truncate(&s.raw_body.split_whitespace().collect::<Vec<_>>().join(" "), 50);
        println!(
            "{:>3} | {:>6} | {:>6} | {:<50}",
            i + 1,
            s.id,
            s.raw_body.chars().count(),
            preview
        );
    }

    println!("\n{} sections", sections.len());
    Ok(())
}

fn read_input(settings: &Settings) -> anyhow::Result<String> {
    std::fs::read_to_string(&settings.input_filename)
        .with_context(|| format!("failed to read {}", settings.input_filename.display()))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
