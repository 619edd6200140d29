//! Short-form municipality number resolution.
//!
//! Municipality numbers are often written without the leading zero ("301"
//! for Oslo's "0301") or typed as integers. Resolution falls back through
//! three tiers, stopping at the first that produces a match:
//!
//! 1. left-pad the input with zeros to four digits and compare exactly;
//! 2. strip leading zeros from both input and candidate and compare;
//! 3. treat the input as a subsequence that must appear in order within the
//!    candidate number.
//!
//! Each tier scans in source order and the first hit wins. Tier 3 is
//! permissive: "31" resolves to "0301" simply because Oslo comes first.

use std::fmt;
use tracing::debug;

use crate::models::Municipality;

const ID_WIDTH: usize = 4;

/// Identifier input for fuzzy lookup, either as typed text or as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdInput {
    Text(String),
    Number(u32),
}

impl IdInput {
    /// Canonical text form used by every tier.
    pub fn normalize(&self) -> String {
        match self {
            IdInput::Text(s) => s.trim().to_string(),
            IdInput::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for IdInput {
    fn from(s: &str) -> Self {
        IdInput::Text(s.to_string())
    }
}

impl From<String> for IdInput {
    fn from(s: String) -> Self {
        IdInput::Text(s)
    }
}

impl From<u16> for IdInput {
    fn from(n: u16) -> Self {
        IdInput::Number(u32::from(n))
    }
}

impl From<u32> for IdInput {
    fn from(n: u32) -> Self {
        IdInput::Number(n)
    }
}

/// Which fallback tier resolved a fuzzy lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchTier {
    /// Zero-padded input equals the id
    Padded,
    /// Input and id are equal once leading zeros are stripped
    ZeroStripped,
    /// Input characters occur in order within the id
    Subsequence,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Padded => write!(f, "padded"),
            MatchTier::ZeroStripped => write!(f, "zero-stripped"),
            MatchTier::Subsequence => write!(f, "subsequence"),
        }
    }
}

/// Result of a fuzzy lookup: the record and how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub municipality: Municipality,
    pub tier: MatchTier,
}

/// Resolve `input` against `records`, borrowing the winning record.
pub fn resolve<'a>(
    records: &'a [Municipality],
    input: &IdInput,
) -> Option<(&'a Municipality, MatchTier)> {
    let needle = input.normalize();
    if needle.is_empty() {
        return None;
    }

    let padded = format!("{:0>width$}", needle, width = ID_WIDTH);
    if let Some(m) = records.iter().find(|m| m.id == padded) {
        return Some(found(m, MatchTier::Padded, &needle));
    }

    let stripped = needle.trim_start_matches('0');
    if let Some(m) = records
        .iter()
        .find(|m| m.id.trim_start_matches('0') == stripped)
    {
        return Some(found(m, MatchTier::ZeroStripped, &needle));
    }

    if let Some(m) = records.iter().find(|m| is_subsequence(&needle, &m.id)) {
        return Some(found(m, MatchTier::Subsequence, &needle));
    }

    debug!("Fuzzy lookup '{}' matched nothing", needle);
    None
}

fn found<'a>(m: &'a Municipality, tier: MatchTier, needle: &str) -> (&'a Municipality, MatchTier) {
    debug!("Fuzzy lookup '{}' resolved to {} ({})", needle, m.id, tier);
    (m, tier)
}

/// Whether every char of `needle` appears in `haystack` in order.
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}
