//! Adkiln Core - Foundational types for the adkiln pipeline
//!
//! This crate provides the types the other adkiln crates depend on:
//! - `KilnError` and the `Result` alias
//! - `ContentHash` - SHA-256 based content hashing for asset provenance

mod error;
mod hash;

pub use error::{KilnError, Result};
pub use hash::ContentHash;
