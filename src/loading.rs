//! The page-wide loading indicator.
//!
//! One flag shared by every submission. There is no mutual exclusion:
//! overlapping submissions race on show/hide and the last write wins.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    visible: Arc<AtomicBool>,
    shown: Arc<AtomicU64>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
        self.shown.fetch_add(1, Ordering::SeqCst);
    }

    pub fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// How many times the indicator has been shown since start-up.
    pub fn times_shown(&self) -> u64 {
        self.shown.load(Ordering::SeqCst)
    }

    /// Shows the indicator until the guard is dropped.
    pub fn guard(&self) -> LoadingGuard {
        self.show();
        LoadingGuard {
            indicator: self.clone(),
        }
    }
}

/// Hides the indicator on drop, on every exit path.
#[must_use = "the indicator is hidden as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LoadingGuard {
    indicator: LoadingIndicator,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_shows_then_hides() {
        let loading = LoadingIndicator::new();
        assert!(!loading.is_visible());
        {
            let _guard = loading.guard();
            assert!(loading.is_visible());
        }
        assert!(!loading.is_visible());
        assert_eq!(loading.times_shown(), 1);
    }

    #[test]
    fn test_hidden_on_early_return() {
        fn fails(loading: &LoadingIndicator) -> Result<(), String> {
            let _guard = loading.guard();
            let step: Result<(), String> = Err("boom".to_string());
            step?;
            Ok(())
        }
        let loading = LoadingIndicator::new();
        assert!(fails(&loading).is_err());
        assert!(!loading.is_visible());
    }

    #[test]
    fn test_overlapping_guards_last_writer_wins() {
        let loading = LoadingIndicator::new();
        let first = loading.guard();
        let second = loading.guard();
        drop(first);
        // The first call finishing hides the flag even though the second is
        // still in flight.
        assert!(!loading.is_visible());
        drop(second);
        assert!(!loading.is_visible());
        assert_eq!(loading.times_shown(), 2);
    }
}
