//! Section summarization.
//!
//! The only backend today is [`ReverseSummarizer`], which stands in for a
//! language model: it normalizes the text and returns its words in reverse
//! order. Anything that can turn a section body into a summary can plug in
//! through [`Summarizer`].

use itertools::Itertools;

use crate::error::Result;

/// A backend that turns one section body into its summary.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str) -> Result<String>;
}

/// Simulated summarizer: [`transform`] applied to the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseSummarizer;

impl Summarizer for ReverseSummarizer {
    fn summarize(&self, text: &str) -> Result<String> {
        Ok(transform(text))
    }
}

/// Strip everything but letters, digits and whitespace, then collapse
/// whitespace runs into single spaces and trim. Case is kept.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .join(" ")
}

/// Normalize, then reverse the word order.
pub fn transform(raw_body: &str) -> String {
    normalize(raw_body).split(' ').rev().join(" ")
}
