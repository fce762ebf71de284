//! Command-line batch tool for Hebrew root-letter alignment.
//!
//! Wraps the `shoresh-core` pipeline with a JSON-file word store, logging,
//! and summary reporting.

pub mod commands;
pub mod output;
pub mod store;

pub use store::{JsonFileStore, StoreError, WordStore};
