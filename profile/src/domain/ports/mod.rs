//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notifier;
pub mod storage;

pub use notifier::Notifier;
pub use storage::{entry_size, KeyValueStorage};
