//! Regulation extractor - splits a regulatory text into `Section N` blocks
//! and summarizes each one.
//!
//! Pipeline:
//!   1. segment the document at `Section <digits>` markers
//!   2. summarize every section body through a [`summary::Summarizer`]
//!   3. write the ordered records as JSON or CSV

pub mod error;
pub mod output;
pub mod parser;
pub mod settings;
pub mod summary;

pub use error::{Error, Result};
pub use parser::sections::{segment, Section, SectionId};
pub use parser::{process_document, ProcessedSection};
pub use summary::{normalize, transform, ReverseSummarizer, Summarizer};
