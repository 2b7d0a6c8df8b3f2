//! Section model: kinds, content schemas, loading, and validation.
//!
//! A page is an ordered list of [`SectionConfig`]s. Each config pairs a
//! kind-tagged content record with optional theme overrides; the render
//! module turns configs into render trees.

pub mod kind;
pub mod loader;
pub mod schema;
pub mod validation;

pub use kind::SectionKind;
pub use loader::{LoadResult, MAX_CONFIG_SIZE, load_sections, parse_sections};
pub use schema::*;
pub use validation::{ValidationResult, Validator};
