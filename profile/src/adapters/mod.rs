//! Adapters layer
//!
//! Implementations of port traits for the local machine.

pub mod file;
pub mod terminal;

pub use file::FileKeyValueStorage;
pub use terminal::TerminalNotifier;
