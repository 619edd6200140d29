//! Reading the JSON record tables.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{LoadError, Result};

/// County table compiled into the crate.
pub const BUNDLED_COUNTIES: &str = include_str!("../../data/fylker.json");

/// Municipality table compiled into the crate.
pub const BUNDLED_MUNICIPALITIES: &str = include_str!("../../data/kommuner.json");

/// Parse a JSON array of records, keeping source order.
pub fn parse_records<T: DeserializeOwned>(resource: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        resource: resource.to_string(),
        source,
    })
}

/// Read and parse a JSON array of records from disk.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    info!("Loading records from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_records(&path.display().to_string(), &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{County, Municipality};

    #[test]
    fn test_bundled_tables_parse() {
        let counties: Vec<County> = parse_records("fylker.json", BUNDLED_COUNTIES).unwrap();
        let municipalities: Vec<Municipality> =
            parse_records("kommuner.json", BUNDLED_MUNICIPALITIES).unwrap();
        assert_eq!(counties.len(), 15);
        assert_eq!(municipalities.len(), 357);
    }

    #[test]
    fn test_malformed_json_names_resource() {
        let err = parse_records::<County>("fylker.json", "[{\"id\": 3}]").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("Malformed fylker.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kommuner.json");
        let err = read_records::<Municipality>(&path).unwrap_err();
        match err {
            LoadError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_records_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fylker.json");
        fs::write(
            &path,
            r#"[
                {"id": "56", "name": "Finnmark", "website": "https://www.ffk.no/"},
                {"id": "03", "name": "Oslo", "website": "https://www.oslo.kommune.no/"}
            ]"#,
        )
        .unwrap();

        let counties: Vec<County> = read_records(&path).unwrap();
        let ids: Vec<&str> = counties.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["56", "03"]);
    }
}
