//! Structured logging of `LazyResult` states.
//!
//! Enabled with the `tracing` feature. Orchestration code can drop a
//! [`LazyResult::trace`] call wherever it replaces the value it holds, and get
//! a `DEBUG` event per transition without touching the value.
//!
//! ```rust
//! use lazy_result::LazyResult;
//!
//! let r: LazyResult<String, u32> = LazyResult::loading().trace("profile");
//! assert!(r.is_loading());
//! ```

use crate::LazyResult;

impl<E, A> LazyResult<E, A> {
    /// Emit a `DEBUG` event naming `label` and the current state, then return
    /// `self` unchanged.
    ///
    /// Payloads are not recorded, so `E` and `A` need no `Debug` bound.
    #[inline]
    pub fn trace(self, label: &str) -> Self {
        tracing::debug!(label, state = self.state().name(), "lazy result state");
        self
    }

    /// Like [`trace`](LazyResult::trace), but also records the error payload
    /// of a `Failure` at `WARN` level.
    pub fn trace_failure(self, label: &str) -> Self
    where
        E: std::fmt::Debug,
    {
        match &self {
            LazyResult::Failure(e) => {
                tracing::warn!(label, error = ?e, "lazy result failed");
            }
            _ => {
                tracing::debug!(label, state = self.state().name(), "lazy result state");
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_trace_logs_state() {
        let r: LazyResult<&str, i32> = LazyResult::loading();
        let r = r.trace("users");

        assert!(r.is_loading());
        assert!(logs_contain("users"));
        assert!(logs_contain("Loading"));
    }

    #[test]
    #[traced_test]
    fn test_trace_failure_logs_error() {
        let r: LazyResult<&str, i32> = LazyResult::failure("timeout");
        let r = r.trace_failure("users");

        assert_eq!(r, LazyResult::failure("timeout"));
        assert!(logs_contain("lazy result failed"));
        assert!(logs_contain("timeout"));
    }

    #[test]
    #[traced_test]
    fn test_trace_failure_on_success_logs_state_only() {
        let r: LazyResult<&str, i32> = LazyResult::success(3);
        let r = r.trace_failure("users");

        assert_eq!(r.value(), Some(&3));
        assert!(logs_contain("Success"));
        assert!(!logs_contain("lazy result failed"));
    }
}
