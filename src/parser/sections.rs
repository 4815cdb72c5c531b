use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bSection\s+([0-9]+)").unwrap());

/// Integer id of a section, of any length.
///
/// Held as its canonical decimal digits (leading zeros dropped) and
/// serialized as a JSON number, so ids wider than `u64` survive intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        SectionId(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `None` when the id is too wide for a `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for SectionId {
    fn from(id: u64) -> Self {
        SectionId(id.to_string())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Serialize for SectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Number::from_string_unchecked(self.0.clone()).serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub raw_body: String,
}

/// A marker hit: the captured id, where the marker text starts, and where
/// the body starts (just past the id digits).
struct Marker {
    id: SectionId,
    start: usize,
    body_start: usize,
}

/// Split a document into sections at every `Section <digits>` marker.
///
/// Text before the first marker is dropped. Ids are taken verbatim, so
/// duplicates and gaps survive.
pub fn segment(document: &str) -> Vec<Section> {
    let markers: Vec<Marker> = MARKER_RE
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let digits = caps.get(1)?;
            Some(Marker {
                id: SectionId::from_digits(digits.as_str()),
                start: whole.start(),
                body_start: digits.end(),
            })
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers
                .get(i + 1)
                .map(|next| next.start)
                .unwrap_or(document.len());
            Section {
                id: marker.id.clone(),
                raw_body: document[marker.body_start..end].to_string(),
            }
        })
        .collect()
}

// ── Tests ──
