//! Payload-free view of a [`LazyResult`](crate::LazyResult)'s variant.
//!
//! [`State`] names which of the four variants is active without carrying the
//! payload, which makes it cheap to copy, compare and log. [`Unresolved`] is
//! the error produced when a value that has not settled yet is forced into a
//! `Result`.
//!
//! # Examples
//!
//! ```
//! use lazy_result::{LazyResult, State};
//!
//! let r: LazyResult<String, i32> = LazyResult::loading();
//! assert_eq!(r.state(), State::Loading);
//! assert!(r.state().is_pending());
//! assert_eq!(r.state().to_string(), "Loading");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// The variant tag of a [`LazyResult`](crate::LazyResult).
///
/// Ordering follows the conventional lifecycle:
/// `Initial < Loading < Failure < Success`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// Computation not yet requested
    Initial,
    /// Computation requested, outcome pending
    Loading,
    /// Computation completed unsuccessfully
    Failure,
    /// Computation completed successfully
    Success,
}

impl State {
    /// All states, in lifecycle order.
    pub const ALL: [State; 4] = [
        State::Initial,
        State::Loading,
        State::Failure,
        State::Success,
    ];

    /// The variant name, as used by `Display`.
    ///
    /// ```
    /// use lazy_result::State;
    ///
    /// assert_eq!(State::Failure.name(), "Failure");
    /// ```
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            State::Initial => "Initial",
            State::Loading => "Loading",
            State::Failure => "Failure",
            State::Success => "Success",
        }
    }

    /// Returns `true` for `Failure` and `Success`.
    #[inline]
    pub const fn is_settled(self) -> bool {
        matches!(self, State::Failure | State::Success)
    }

    /// Returns `true` for `Initial` and `Loading`.
    #[inline]
    pub const fn is_pending(self) -> bool {
        !self.is_settled()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when converting a pending value into a `Result`.
///
/// Only `Initial` and `Loading` values produce this error; the state they were
/// in is kept so callers can tell "never started" from "still running".
///
/// # Examples
///
/// ```
/// use lazy_result::{LazyResult, State};
///
/// let r: LazyResult<String, i32> = LazyResult::initial();
/// let err = r.into_result().unwrap_err();
///
/// assert_eq!(err.state(), State::Initial);
/// assert_eq!(err.to_string(), "computation has not settled: Initial");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unresolved {
    state: State,
}

impl Unresolved {
    pub(crate) fn new(state: State) -> Self {
        debug_assert!(state.is_pending());
        Unresolved { state }
    }

    /// The state the value was in when the conversion was attempted.
    pub fn state(&self) -> State {
        self.state
    }
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "computation has not settled: {}", self.state)
    }
}

impl StdError for Unresolved {}
