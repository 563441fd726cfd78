//! Core types for the rolodex contact manager.
//!
//! Holds the record types, the resolver that turns an id or name pattern into
//! a single record, the patch engine behind `people edit`, and the static
//! field registry used for rendering. Nothing in this crate touches the
//! filesystem; persistence goes through the [`store::RecordStore`] trait.

pub mod business;
pub mod error;
pub mod field;
pub mod patch;
pub mod person;
pub mod record;
pub mod resolve;
pub mod store;
pub mod task;

pub use error::{Error, Result};
