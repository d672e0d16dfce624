//! Notifier port trait
//!
//! The one channel through which services reach the user outside of a
//! command's own output, used for warnings that must not be missed.

/// Delivers human-readable warnings to the user
pub trait Notifier: Send + Sync {
    fn warn(&self, message: &str);
}
