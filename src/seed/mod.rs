//! Catalog seeding.
//!
//! One-shot bootstrap of the builder database: default users, the
//! section catalog (categories, sections, a variant), and a sample
//! website. The dataset is small and fixed; see [`defaults`] for the
//! stock content and [`seeder::Seeder`] for the insert pipeline.

pub mod defaults;
pub mod schema;
pub mod seeder;

pub use seeder::{SeedSummary, Seeder};
