//! Single-flight control for user-triggered submissions.

use crate::error::ServiceError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Shared enabled/disabled state of the submit action.
#[derive(Debug, Clone, Default)]
pub struct SubmitControl {
    in_flight: Arc<AtomicBool>,
}

impl SubmitControl {
    /// Creates an enabled control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the control for the lifetime of the returned guard.
    ///
    /// # Errors
    /// Returns `Busy` if a submission is already in flight.
    pub fn try_acquire(&self) -> Result<SubmitGuard, ServiceError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ServiceError::Busy)?;
        debug!("Submit control disabled");
        Ok(SubmitGuard {
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    /// Whether a new submission would be accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.in_flight.load(Ordering::SeqCst)
    }
}

/// Re-enables the control when dropped, whatever the outcome.
#[derive(Debug)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::SeqCst);
        debug!("Submit control re-enabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_busy() {
        let control = SubmitControl::new();
        let guard = control.try_acquire().unwrap();
        assert!(!control.is_enabled());
        assert!(matches!(control.try_acquire(), Err(ServiceError::Busy)));
        drop(guard);
        assert!(control.is_enabled());
        assert!(control.try_acquire().is_ok());
    }

    #[test]
    fn test_guard_released_on_panic() {
        let control = SubmitControl::new();
        let cloned = control.clone();
        let outcome = std::panic::catch_unwind(move || {
            let _guard = cloned.try_acquire().unwrap();
            panic!("render failed");
        });
        assert!(outcome.is_err());
        assert!(control.is_enabled());
    }
}
