//! County (fylke) records.

use serde::{Deserialize, Serialize};
use url::Url;

/// A first-level administrative division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct County {
    /// Two-digit county number, e.g. "03" for Oslo
    pub id: String,

    /// Official name
    pub name: String,

    /// County administration website
    pub website: Url,
}

impl County {
    /// Whether a municipality number belongs to this county.
    pub fn contains_municipality_id(&self, municipality_id: &str) -> bool {
        municipality_id.starts_with(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oslo() -> County {
        County {
            id: "03".to_string(),
            name: "Oslo".to_string(),
            website: Url::parse("https://www.oslo.kommune.no/").unwrap(),
        }
    }

    #[test]
    fn test_contains_municipality_id() {
        let county = oslo();
        assert!(county.contains_municipality_id("0301"));
        assert!(!county.contains_municipality_id("3101"));
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{"id":"03","name":"Oslo","website":"https://www.oslo.kommune.no/"}"#;
        let county: County = serde_json::from_str(json).unwrap();
        assert_eq!(county, oslo());
    }

    #[test]
    fn test_rejects_bad_website() {
        let json = r#"{"id":"03","name":"Oslo","website":"not a url"}"#;
        assert!(serde_json::from_str::<County>(json).is_err());
    }
}
