//! # lazy-result
//!
//! A four-state sum type for the lifecycle of an asynchronous computation.
//!
//! UI and orchestration code often tracks a request with separate
//! `is_loading`, `error` and `data` fields that can disagree with each other.
//! [`LazyResult`] replaces them with a single value that is always exactly one
//! of:
//!
//! - **Initial**: not requested yet
//! - **Loading**: requested, outcome pending
//! - **Failure(E)**: completed with an error
//! - **Success(A)**: completed with a value
//!
//! The type is a snapshot, not a future. Whatever runs the work replaces the
//! value it holds; consumers handle every state through [`LazyResult::dispatch`]
//! or an ordinary `match`.
//!
//! ## Quick Example
//!
//! ```rust
//! use lazy_result::{failure, success, LazyResult};
//!
//! fn label(r: LazyResult<&str, u32>) -> String {
//!     r.map_success(|n| n * 2).dispatch(
//!         || String::new(),
//!         || "Loading...".to_string(),
//!         |e| format!("Error: {}", e),
//!         |n| format!("Data: {}", n),
//!     )
//! }
//!
//! assert_eq!(label(LazyResult::loading()), "Loading...");
//! assert_eq!(label(failure("oops")), "Error: oops");
//! assert_eq!(label(success(21)), "Data: 42");
//!
//! let r: LazyResult<&str, &str> = success("awesome");
//! assert_eq!(r.to_string(), "Success(awesome)");
//! assert_eq!(r.value(), Some(&"awesome"));
//! assert_eq!(r.error(), None);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`LazyResult`] and [`State`]
//! - `proptest`: `Arbitrary` for [`LazyResult`]
//! - `tracing`: [`LazyResult::trace`] for logging state transitions

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod lazy_result;
pub mod state;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;

// Re-exports
pub use lazy_result::{failure, initial, loading, success, LazyResult};
pub use state::{State, Unresolved};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::lazy_result::{failure, initial, loading, success, LazyResult};
    pub use crate::state::{State, Unresolved};
}
