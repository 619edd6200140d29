//! Norgeo - Norwegian counties (fylker) and municipalities (kommuner)
//!
//! This library loads the two reference tables once into an immutable
//! [`Registry`] and exposes lookups, range filters and name search over them.
//!
//! ```no_run
//! let registry = norgeo::Registry::bundled()?;
//! let oslo = registry.municipalities().fuzzy("301");
//! let trondelag = registry.municipalities().in_county("50");
//! # Ok::<(), norgeo::LoadError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod store;

pub use config::Config;
pub use error::LoadError;
pub use models::{County, LanguageForm, Municipality};
pub use query::{CountyQuery, FuzzyMatch, IdInput, MatchTier, MunicipalityQuery};
pub use store::Registry;
