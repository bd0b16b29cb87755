//! Core engine for slowcheck property-based testing.
//!
//! This crate provides the fundamental building blocks: seeded random
//! sources, composable generators, shrinking, and the property runner.

pub mod chars;
pub mod data;
pub mod error;
pub mod frequency;
pub mod gen;
pub mod property;
pub mod tree;

// Re-export the main types
pub use data::*;
pub use error::*;
pub use frequency::*;
pub use gen::*;
pub use property::*;
pub use tree::*;
