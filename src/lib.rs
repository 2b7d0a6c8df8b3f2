//! Sitewright - section rendering engine for a website builder
//!
//! This library turns declarative section configs into render trees,
//! drives the interaction state behind the dynamic sections, and seeds
//! the builder database with the starter catalog.

pub mod cli;
pub mod error;
pub mod interact;
pub mod observability;
pub mod render;
pub mod section;
pub mod seed;
pub mod theme;
