//! Core data models for the reference tables.

pub mod county;
pub mod municipality;

pub use county::County;
pub use municipality::{LanguageForm, Municipality, ParseLanguageFormError};
