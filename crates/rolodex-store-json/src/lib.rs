//! JSON-file backend for the rolodex record store.
//!
//! Each entity type lives in its own file holding a single JSON array. Loads
//! read the whole array; saves rewrite it.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{JsonStore, StorePaths};
