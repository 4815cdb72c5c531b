pub mod sections;

use serde::Serialize;
use tracing::{debug, info, warn};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::Result;
use crate::summary::Summarizer;
use sections::{Section, SectionId};

/// One output record: the section id, its raw body, and the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedSection {
    pub id: SectionId,
    pub original_text: String,
    pub transformed_text: String,
}

/// Two-step pipeline: document → sections → summaries, in marker order.
pub fn process_document(
    document: &str,
    summarizer: &dyn Summarizer,
) -> Result<Vec<ProcessedSection>> {
    let sections = sections::segment(document);
    if sections.is_empty() {
        warn!("No sections were extracted from input document");
        return Ok(Vec::new());
    }
    info!(count = sections.len(), "sections extracted");

    summarize_all(sections, summarizer)
}

fn summarize_one(section: Section, summarizer: &dyn Summarizer) -> Result<ProcessedSection> {
    debug!(id = %section.id, chars = section.raw_body.len(), "summarizing section");
    let transformed_text = summarizer.summarize(&section.raw_body)?;
    Ok(ProcessedSection {
        id: section.id,
        original_text: section.raw_body,
        transformed_text,
    })
}

#[cfg(feature = "rayon")]
fn summarize_all(
    sections: Vec<Section>,
    summarizer: &dyn Summarizer,
) -> Result<Vec<ProcessedSection>> {
    sections
        .into_par_iter()
        .map(|s| summarize_one(s, summarizer))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn summarize_all(
    sections: Vec<Section>,
    summarizer: &dyn Summarizer,
) -> Result<Vec<ProcessedSection>> {
    sections
        .into_iter()
        .map(|s| summarize_one(s, summarizer))
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::summary::{transform, ReverseSummarizer};

    struct Upper;

    impl Summarizer for Upper {
        fn summarize(&self, text: &str) -> Result<String> {
            Ok(text.trim().to_uppercase())
        }
    }

    struct Failing;

    impl Summarizer for Failing {
        fn summarize(&self, _text: &str) -> Result<String> {
            Err(Error::Summarize("backend unavailable".to_string()))
        }
    }

    #[test]
    fn end_to_end_small_document() {
        let out = process_document(
            "Title\nSection 1: A\nfoo bar\nSection 2: B\nbaz",
            &ReverseSummarizer,
        )
        .unwrap();
        assert_eq!(
            out,
            vec![
                ProcessedSection {
                    id: SectionId::from(1),
                    original_text: ": A\nfoo bar\n".to_string(),
                    transformed_text: "bar foo A".to_string(),
                },
                ProcessedSection {
                    id: SectionId::from(2),
                    original_text: ": B\nbaz".to_string(),
                    transformed_text: "baz B".to_string(),
                },
            ]
        );
    }

    #[test]
    fn no_sections_is_empty_not_error() {
        let out = process_document("nothing to see here", &ReverseSummarizer).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn order_follows_markers() {
        let doc: String = (0..200).rev().map(|i| format!("Section {} body {}\n", i, i)).collect();
        let out = process_document(&doc, &ReverseSummarizer).unwrap();
        let ids: Vec<u64> = out.iter().filter_map(|p| p.id.as_u64()).collect();
        assert_eq!(ids, (0..200).rev().collect::<Vec<_>>());
        assert_eq!(out[0].transformed_text, "199 body");
    }

    #[test]
    fn summarizer_is_pluggable() {
        let out = process_document("Section 3 shall comply", &Upper).unwrap();
        assert_eq!(out[0].transformed_text, "SHALL COMPLY");
    }

    #[test]
    fn backend_failure_propagates() {
        let err = process_document("Section 1 text", &Failing).unwrap_err();
        assert!(matches!(err, Error::Summarize(_)));
    }

    #[test]
    fn wide_ids_keep_one_record_per_marker() {
        let out = process_document(
            "Section 1 alpha\nSection 123456789012345678901 beta\nSection 2 gamma",
            &ReverseSummarizer,
        )
        .unwrap();
        let ids: Vec<String> = out.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["1", "123456789012345678901", "2"]);
        assert_eq!(out[1].transformed_text, "beta");
    }

    #[test]
    fn sequential_and_parallel_paths_agree() {
        let text = std::fs::read_to_string("tests/fixtures/regulations.txt").unwrap();
        let expected: Vec<String> = sections::segment(&text)
            .iter()
            .map(|s| transform(&s.raw_body))
            .collect();
        let out = summarize_all(sections::segment(&text), &ReverseSummarizer).unwrap();
        let got: Vec<String> = out.into_iter().map(|p| p.transformed_text).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn regulations_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/regulations.txt").unwrap();
        let out = process_document(&text, &ReverseSummarizer).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out[0]
            .transformed_text
            .starts_with("residents of data personal process that organizations all to applies"));
        assert!(out[0].transformed_text.ends_with("Scope and Purpose"));
        assert_eq!(out[3].transformed_text, transform(&out[3].original_text));
    }
}
