//! Read-only queries over the loaded tables.
//!
//! Query views borrow the store and hand out owned copies of matching
//! records, so callers can never observe or cause mutation of shared data.

mod county;
mod fuzzy;
mod municipality;

pub use county::CountyQuery;
pub use fuzzy::{FuzzyMatch, IdInput, MatchTier};
pub use municipality::MunicipalityQuery;

/// Case-insensitive equality, Unicode aware ("ÅL" equals "ål").
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring test. `needle` must already be lowercased.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
