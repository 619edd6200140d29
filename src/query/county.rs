use tracing::debug;

use super::{contains_folded, eq_ignore_case};
use crate::models::County;

/// Queries over the county table.
#[derive(Debug, Clone, Copy)]
pub struct CountyQuery<'a> {
    records: &'a [County],
}

impl<'a> CountyQuery<'a> {
    pub fn new(records: &'a [County]) -> Self {
        Self { records }
    }

    /// The whole table in source order.
    pub fn all(&self) -> Vec<County> {
        self.records.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a County> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-sensitive lookup by county number.
    pub fn by_id(&self, id: &str) -> Option<County> {
        self.records.iter().find(|c| c.id == id).cloned()
    }

    /// Case-insensitive lookup by name.
    pub fn by_name(&self, name: &str) -> Option<County> {
        let found = self
            .records
            .iter()
            .find(|c| eq_ignore_case(&c.name, name))
            .cloned();
        debug!("County name lookup '{}': {}", name, found.is_some());
        found
    }

    /// Case-insensitive substring search over names, in source order.
    pub fn search(&self, text: &str) -> Vec<County> {
        let needle = text.to_lowercase();
        self.records
            .iter()
            .filter(|c| contains_folded(&c.name, &needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::store::Registry;

    #[test]
    fn test_every_county_found_by_id() {
        let registry = Registry::bundled().unwrap();
        let counties = registry.counties();
        for county in counties.iter() {
            assert_eq!(counties.by_id(&county.id).as_ref(), Some(county));
        }
    }

    #[test]
    fn test_by_id_is_case_sensitive_and_exact() {
        let registry = Registry::bundled().unwrap();
        let counties = registry.counties();
        assert_eq!(counties.by_id("03").unwrap().name, "Oslo");
        assert!(counties.by_id("3").is_none());
        assert!(counties.by_id("0301").is_none());
    }

    #[test]
    fn test_by_name_ignores_case() {
        let registry = Registry::bundled().unwrap();
        let counties = registry.counties();
        assert_eq!(counties.by_name("oslo"), counties.by_name("Oslo"));
        assert_eq!(counties.by_name("MØRE OG ROMSDAL").unwrap().id, "15");
        assert!(counties.by_name("Viken").is_none());
    }

    #[test]
    fn test_search() {
        let registry = Registry::bundled().unwrap();
        let counties = registry.counties();
        let ids: Vec<String> = counties.search("FOLD").into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["31", "39"]);
        assert_eq!(counties.search("").len(), counties.len());
    }

    #[test]
    fn test_all_preserves_source_order() {
        let registry = Registry::bundled().unwrap();
        let all = registry.counties().all();
        assert_eq!(all.len(), 15);
        assert_eq!(all.first().unwrap().id, "03");
        assert_eq!(all.last().unwrap().id, "56");
    }
}
