//! Terminal adapters

pub mod notifier;

pub use notifier::TerminalNotifier;
