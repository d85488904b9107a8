//! Catalog ownership and state persistence.
//!
//! - [`CourseCatalog`]: the single mutable catalog; seat counts are the only
//!   thing that changes, always clamped to zero or more.
//! - [`KeyValueStore`]: minimal `load`/`save` interface with in-memory and
//!   directory-backed implementations.
//! - [`persistence`]: selection and catalog snapshots on top of any store,
//!   tolerant of missing or malformed data.

mod catalog;
mod error;
mod kv;
pub mod persistence;

pub use catalog::CourseCatalog;
pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
