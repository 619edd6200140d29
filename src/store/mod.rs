//! The immutable reference-data store.
//!
//! A [`Registry`] is built once at startup from the bundled tables, a data
//! directory, or a TOML config, and is never modified afterwards. The tables
//! sit behind `Arc`, so clones are cheap and can be shared across threads
//! without locking.

mod loader;

pub use loader::{parse_records, read_records, BUNDLED_COUNTIES, BUNDLED_MUNICIPALITIES};

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{Config, DEFAULT_COUNTIES_FILE, DEFAULT_MUNICIPALITIES_FILE};
use crate::error::Result;
use crate::models::{County, Municipality};
use crate::query::{CountyQuery, MunicipalityQuery};

/// Both reference tables plus every query over them.
#[derive(Debug, Clone)]
pub struct Registry {
    counties: Arc<[County]>,
    municipalities: Arc<[Municipality]>,
}

impl Registry {
    /// Build a registry from already-loaded tables, preserving their order.
    pub fn new(counties: Vec<County>, municipalities: Vec<Municipality>) -> Self {
        for m in &municipalities {
            if !counties.iter().any(|c| c.id == m.county_id()) {
                warn!(
                    "Municipality {} ({}) has no county with id {}",
                    m.id,
                    m.name,
                    m.county_id()
                );
            }
        }

        info!(
            "Registry loaded with {} counties and {} municipalities",
            counties.len(),
            municipalities.len()
        );

        Self {
            counties: counties.into(),
            municipalities: municipalities.into(),
        }
    }

    /// Load the tables compiled into the crate.
    pub fn bundled() -> Result<Self> {
        let counties = parse_records(DEFAULT_COUNTIES_FILE, BUNDLED_COUNTIES)?;
        let municipalities = parse_records(DEFAULT_MUNICIPALITIES_FILE, BUNDLED_MUNICIPALITIES)?;
        Ok(Self::new(counties, municipalities))
    }

    /// Load `fylker.json` and `kommuner.json` from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let counties = read_records(&dir.join(DEFAULT_COUNTIES_FILE))?;
        let municipalities = read_records(&dir.join(DEFAULT_MUNICIPALITIES_FILE))?;
        Ok(Self::new(counties, municipalities))
    }

    /// Load the tables named in a config file.
    pub fn from_config(config: &Config) -> Result<Self> {
        let counties = read_records(&config.data.counties_path())?;
        let municipalities = read_records(&config.data.municipalities_path())?;
        Ok(Self::new(counties, municipalities))
    }

    pub fn counties(&self) -> CountyQuery<'_> {
        CountyQuery::new(&self.counties)
    }

    pub fn municipalities(&self) -> MunicipalityQuery<'_> {
        MunicipalityQuery::new(&self.municipalities)
    }

    /// The county a municipality belongs to, by id prefix.
    pub fn county_of(&self, municipality: &Municipality) -> Option<County> {
        self.counties().by_id(municipality.county_id())
    }

    /// Total population of the municipalities in a county.
    pub fn county_population(&self, county_id: &str) -> u64 {
        self.municipalities
            .iter()
            .filter(|m| m.id.starts_with(county_id))
            .map(|m| u64::from(m.population))
            .sum()
    }
}
