//! File adapters
//!
//! Implementation of the storage port on top of a single JSON document.

pub mod storage;

pub use storage::FileKeyValueStorage;
