//! Notifier that writes warnings to stderr, where they stand apart from the
//! screens printed on stdout.

use crate::domain::ports::Notifier;

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn warn(&self, message: &str) {
        eprintln!("\n[!] {}\n", message);
    }
}
