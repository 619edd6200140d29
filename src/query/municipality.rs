use std::ops::RangeBounds;
use tracing::debug;

use super::fuzzy::{self, FuzzyMatch, IdInput};
use super::{contains_folded, eq_ignore_case};
use crate::models::Municipality;

/// Queries over the municipality table.
///
/// Every method is a linear scan in source order; results are owned copies.
#[derive(Debug, Clone, Copy)]
pub struct MunicipalityQuery<'a> {
    records: &'a [Municipality],
}

impl<'a> MunicipalityQuery<'a> {
    pub fn new(records: &'a [Municipality]) -> Self {
        Self { records }
    }

    /// The whole table in source order.
    pub fn all(&self) -> Vec<Municipality> {
        self.records.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Municipality> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-sensitive lookup by municipality number.
    pub fn by_id(&self, id: &str) -> Option<Municipality> {
        self.records.iter().find(|m| m.id == id).cloned()
    }

    /// Case-insensitive lookup against the primary or alternate name.
    /// Names are not unique (two "Herøy"); the first in source order wins.
    pub fn by_name(&self, name: &str) -> Option<Municipality> {
        self.records
            .iter()
            .find(|m| m.names().any(|n| eq_ignore_case(n, name)))
            .cloned()
    }

    /// Resolve a short or numeric municipality number: zero-padded exact
    /// match, then zero-stripped match, then in-order subsequence.
    pub fn fuzzy(&self, input: impl Into<IdInput>) -> Option<Municipality> {
        self.fuzzy_match(input).map(|found| found.municipality)
    }

    /// Like [`fuzzy`](Self::fuzzy), also reporting which tier matched.
    pub fn fuzzy_match(&self, input: impl Into<IdInput>) -> Option<FuzzyMatch> {
        let input = input.into();
        fuzzy::resolve(self.records, &input).map(|(m, tier)| FuzzyMatch {
            municipality: m.clone(),
            tier,
        })
    }

    /// Municipalities whose population lies in `range`. Use `min..=max` for
    /// inclusive bounds and `min..` for an open upper end.
    pub fn by_population<R: RangeBounds<u32>>(&self, range: R) -> Vec<Municipality> {
        self.filter(|m| range.contains(&m.population))
    }

    /// Municipalities whose area (km²) lies in `range`. An upper bound of
    /// `f64::INFINITY` is accepted as open-ended.
    pub fn by_area<R: RangeBounds<f64>>(&self, range: R) -> Vec<Municipality> {
        self.filter(|m| range.contains(&m.area_km2))
    }

    /// Case-insensitive substring search over primary and alternate names.
    /// The empty string matches every record.
    pub fn search(&self, text: &str) -> Vec<Municipality> {
        let needle = text.to_lowercase();
        let hits = self.filter(|m| m.names().any(|n| contains_folded(n, &needle)));
        debug!("Municipality search '{}': {} hits", text, hits.len());
        hits
    }

    /// Municipalities whose number starts with `county_id`.
    pub fn in_county(&self, county_id: &str) -> Vec<Municipality> {
        self.filter(|m| m.id.starts_with(county_id))
    }

    /// Municipalities using the named language form, compared case-insensitively
    /// ("nynorsk", "Bokmål", "NØYTRAL").
    pub fn by_language_form(&self, form: &str) -> Vec<Municipality> {
        self.filter(|m| eq_ignore_case(m.language_form.as_str(), form))
    }

    fn filter<F>(&self, predicate: F) -> Vec<Municipality>
    where
        F: Fn(&Municipality) -> bool,
    {
        self.records
            .iter()
            .filter(|m| predicate(m))
            .cloned()
            .collect()
    }
}
