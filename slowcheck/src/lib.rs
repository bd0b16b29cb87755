//! Slowcheck property-based testing library.
//!
//! This is the main entry point for the slowcheck library, providing
//! a convenient API for property-based testing in Rust.

pub use slowcheck_core::*;
