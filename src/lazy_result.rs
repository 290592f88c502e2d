//! A snapshot of an asynchronous computation's lifecycle.
//!
//! `LazyResult<E, A>` holds exactly one of four states:
//!
//! - `Initial`: the computation has not been requested yet
//! - `Loading`: the computation was requested and its outcome is pending
//! - `Failure(E)`: the computation completed with an error
//! - `Success(A)`: the computation completed with a value
//!
//! It replaces the usual trio of `is_loading` / `error` / `data` fields, which
//! can drift into combinations that make no sense (loading *and* failed, data
//! *and* an error). A `LazyResult` can only ever be in one state.
//!
//! The type does not run or schedule anything. Orchestration code replaces the
//! value it holds as work progresses, typically
//! `Initial -> Loading -> Failure | Success`, and consumers render whatever the
//! current value is.
//!
//! # Examples
//!
//! ```rust
//! use lazy_result::LazyResult;
//!
//! fn render(state: &LazyResult<String, Vec<u32>>) -> String {
//!     state.as_ref().dispatch(
//!         || "Press fetch to load".to_string(),
//!         || "Loading...".to_string(),
//!         |e| format!("Error: {}", e),
//!         |items| format!("{} items", items.len()),
//!     )
//! }
//!
//! let mut state = LazyResult::initial();
//! assert_eq!(render(&state), "Press fetch to load");
//!
//! state = LazyResult::loading();
//! assert_eq!(render(&state), "Loading...");
//!
//! state = LazyResult::success(vec![1, 2, 3]);
//! assert_eq!(render(&state), "3 items");
//! ```

use std::fmt;

use crate::state::{State, Unresolved};

/// The state of an asynchronous computation: `Initial`, `Loading`,
/// `Failure(E)` or `Success(A)`.
///
/// The error type comes first, mirroring the order in which a computation can
/// settle: every value that is not `Success` is either pending or carries an
/// `E`.
///
/// Equality is structural. Values are plain data; every transformation
/// consumes `self` and returns a new value.
///
/// # Example
///
/// ```rust
/// use lazy_result::LazyResult;
///
/// let r: LazyResult<&str, &str> = LazyResult::failure("oops");
///
/// let message = r.dispatch(
///     || String::new(),
///     || "Loading...".to_string(),
///     |e| format!("Error: {}", e),
///     |data| format!("Data: {}", data),
/// );
/// assert_eq!(message, "Error: oops");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LazyResult<E, A> {
    /// Not yet requested
    Initial,
    /// Requested, outcome pending
    Loading,
    /// Completed unsuccessfully
    Failure(E),
    /// Completed successfully
    Success(A),
}

impl<E, A> LazyResult<E, A> {
    // ========== Constructors ==========

    /// Create an `Initial` value.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let r = LazyResult::<(), ()>::initial();
    /// assert!(r.is_initial());
    /// ```
    #[inline]
    pub fn initial() -> Self {
        LazyResult::Initial
    }

    /// Create a `Loading` value.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let r = LazyResult::<(), ()>::loading();
    /// assert!(r.is_loading());
    /// ```
    #[inline]
    pub fn loading() -> Self {
        LazyResult::Loading
    }

    /// Create a `Failure` carrying `error`.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let r: LazyResult<&str, i32> = LazyResult::failure("oops");
    /// assert!(r.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        LazyResult::Failure(error)
    }

    /// Create a `Success` carrying `value`.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let r: LazyResult<&str, i32> = LazyResult::success(42);
    /// assert!(r.is_success());
    /// ```
    #[inline]
    pub fn success(value: A) -> Self {
        LazyResult::Success(value)
    }

    /// Convert a settled `Result`: `Ok` becomes `Success`, `Err` becomes
    /// `Failure`.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let ok: Result<i32, &str> = Ok(1);
    /// assert_eq!(LazyResult::from_result(ok), LazyResult::success(1));
    /// ```
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(a) => LazyResult::Success(a),
            Err(e) => LazyResult::Failure(e),
        }
    }

    /// Convert an optional value: `Some` becomes `Success`, `None` becomes
    /// `Loading`.
    ///
    /// Useful when a slot is filled in by background work and has no error
    /// channel of its own.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let r = LazyResult::<(), _>::from_option(None::<i32>);
    /// assert!(r.is_loading());
    /// assert_eq!(LazyResult::<(), _>::from_option(Some(3)), LazyResult::success(3));
    /// ```
    #[inline]
    pub fn from_option(value: Option<A>) -> Self {
        match value {
            Some(a) => LazyResult::Success(a),
            None => LazyResult::Loading,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is `Initial`.
    #[inline]
    pub fn is_initial(&self) -> bool {
        matches!(self, LazyResult::Initial)
    }

    /// Returns `true` if this is `Loading`.
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, LazyResult::Loading)
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, LazyResult::Failure(_))
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, LazyResult::Success(_))
    }

    /// Returns `true` if the computation has completed, either way.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// assert!(LazyResult::<&str, i32>::failure("oops").is_settled());
    /// assert!(!LazyResult::<&str, i32>::loading().is_settled());
    /// ```
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.state().is_settled()
    }

    /// Returns `true` for `Initial` and `Loading`.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.state().is_pending()
    }

    /// The active variant, without its payload.
    ///
    /// ```rust
    /// use lazy_result::{LazyResult, State};
    ///
    /// let r: LazyResult<&str, i32> = LazyResult::success(1);
    /// assert_eq!(r.state(), State::Success);
    /// ```
    #[inline]
    pub fn state(&self) -> State {
        match self {
            LazyResult::Initial => State::Initial,
            LazyResult::Loading => State::Loading,
            LazyResult::Failure(_) => State::Failure,
            LazyResult::Success(_) => State::Success,
        }
    }

    // ========== Dispatch ==========

    /// Invoke exactly one handler, chosen by the active variant, and return
    /// its result.
    ///
    /// This is the total pattern match over `LazyResult`: every variant has a
    /// handler, and the payload of `Failure` / `Success` is moved into its
    /// handler. To dispatch without consuming, call it on [`as_ref`].
    ///
    /// [`as_ref`]: LazyResult::as_ref
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let r: LazyResult<&str, &str> = LazyResult::success("awesome");
    /// let out = r.dispatch(
    ///     || String::new(),
    ///     || "Loading...".to_string(),
    ///     |e| format!("Error: {}", e),
    ///     |data| format!("Data: {}", data),
    /// );
    /// assert_eq!(out, "Data: awesome");
    /// ```
    #[inline]
    pub fn dispatch<R, I, L, F, S>(
        self,
        on_initial: I,
        on_loading: L,
        on_failure: F,
        on_success: S,
    ) -> R
    where
        I: FnOnce() -> R,
        L: FnOnce() -> R,
        F: FnOnce(E) -> R,
        S: FnOnce(A) -> R,
    {
        match self {
            LazyResult::Initial => on_initial(),
            LazyResult::Loading => on_loading(),
            LazyResult::Failure(e) => on_failure(e),
            LazyResult::Success(a) => on_success(a),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value, passing every other variant through
    /// unchanged. `f` is only called for `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let ok: LazyResult<&str, &str> = LazyResult::success("awesome");
    /// let err: LazyResult<&str, &str> = LazyResult::failure("oops");
    ///
    /// assert_eq!(
    ///     ok.map_success(|d| format!("Data: {}", d)),
    ///     LazyResult::success("Data: awesome".to_string())
    /// );
    /// assert_eq!(err.map_success(|d| format!("Data: {}", d)), LazyResult::failure("oops"));
    /// ```
    #[inline]
    pub fn map_success<B, F>(self, f: F) -> LazyResult<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            LazyResult::Initial => LazyResult::Initial,
            LazyResult::Loading => LazyResult::Loading,
            LazyResult::Failure(e) => LazyResult::Failure(e),
            LazyResult::Success(a) => LazyResult::Success(f(a)),
        }
    }

    /// Transform the error value, passing every other variant through
    /// unchanged. `f` is only called for `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let err: LazyResult<&str, &str> = LazyResult::failure("oops");
    /// assert_eq!(err.map_failure(|_| 42), LazyResult::failure(42));
    ///
    /// let ok: LazyResult<&str, &str> = LazyResult::success("awesome");
    /// assert_eq!(ok.map_failure(|_| 42), LazyResult::success("awesome"));
    /// ```
    #[inline]
    pub fn map_failure<F2, F>(self, f: F) -> LazyResult<F2, A>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            LazyResult::Initial => LazyResult::Initial,
            LazyResult::Loading => LazyResult::Loading,
            LazyResult::Failure(e) => LazyResult::Failure(f(e)),
            LazyResult::Success(a) => LazyResult::Success(a),
        }
    }

    /// Transform both payloads at once.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let r: LazyResult<i32, &str> = LazyResult::success("hello");
    /// assert_eq!(r.bimap(|e| e + 1, |s| s.len()), LazyResult::success(5));
    /// ```
    #[inline]
    pub fn bimap<F2, B, F, G>(self, f: F, g: G) -> LazyResult<F2, B>
    where
        F: FnOnce(E) -> F2,
        G: FnOnce(A) -> B,
    {
        match self {
            LazyResult::Initial => LazyResult::Initial,
            LazyResult::Loading => LazyResult::Loading,
            LazyResult::Failure(e) => LazyResult::Failure(f(e)),
            LazyResult::Success(a) => LazyResult::Success(g(a)),
        }
    }

    /// Chain a computation on the success value.
    ///
    /// Useful when rendering depends on a second lookup that may itself still
    /// be pending.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let user: LazyResult<&str, u32> = LazyResult::success(7);
    /// let avatar = user.and_then(|id| {
    ///     if id == 7 {
    ///         LazyResult::loading()
    ///     } else {
    ///         LazyResult::success("default.png")
    ///     }
    /// });
    /// assert!(avatar.is_loading());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> LazyResult<E, B>
    where
        F: FnOnce(A) -> LazyResult<E, B>,
    {
        match self {
            LazyResult::Initial => LazyResult::Initial,
            LazyResult::Loading => LazyResult::Loading,
            LazyResult::Failure(e) => LazyResult::Failure(e),
            LazyResult::Success(a) => f(a),
        }
    }

    /// Recover from a failure.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let r: LazyResult<&str, i32> = LazyResult::failure("not found");
    /// let recovered: LazyResult<(), i32> = r.or_else(|_| LazyResult::success(0));
    /// assert_eq!(recovered, LazyResult::success(0));
    /// ```
    #[inline]
    pub fn or_else<F2, F>(self, f: F) -> LazyResult<F2, A>
    where
        F: FnOnce(E) -> LazyResult<F2, A>,
    {
        match self {
            LazyResult::Initial => LazyResult::Initial,
            LazyResult::Loading => LazyResult::Loading,
            LazyResult::Failure(e) => f(e),
            LazyResult::Success(a) => LazyResult::Success(a),
        }
    }

    // ========== Extractors ==========

    /// Borrow the success value, or `None` for every other variant.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let ok: LazyResult<&str, &str> = LazyResult::success("awesome");
    /// let err: LazyResult<&str, &str> = LazyResult::failure("oops");
    ///
    /// assert_eq!(ok.value(), Some(&"awesome"));
    /// assert_eq!(err.value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            LazyResult::Success(a) => Some(a),
            _ => None,
        }
    }

    /// Borrow the error value, or `None` for every other variant.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let err: LazyResult<&str, &str> = LazyResult::failure("oops");
    /// assert_eq!(err.error(), Some(&"oops"));
    /// assert_eq!(LazyResult::<&str, &str>::loading().error(), None);
    /// ```
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            LazyResult::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// Take the success value, consuming self.
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            LazyResult::Success(a) => Some(a),
            _ => None,
        }
    }

    /// Take the error value, consuming self.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            LazyResult::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// The success value, or `default` for every other variant.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// assert_eq!(LazyResult::<&str, i32>::loading().value_or(0), 0);
    /// assert_eq!(LazyResult::<&str, i32>::success(5).value_or(0), 5);
    /// ```
    #[inline]
    pub fn value_or(self, default: A) -> A {
        self.into_value().unwrap_or(default)
    }

    /// The success value, or the result of `f` for every other variant.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> A
    where
        F: FnOnce() -> A,
    {
        self.into_value().unwrap_or_else(f)
    }

    /// Force a settled value into a `Result`.
    ///
    /// `Initial` and `Loading` yield `Err(Unresolved)` recording which of the
    /// two it was.
    ///
    /// ```rust
    /// use lazy_result::{LazyResult, State};
    ///
    /// let ok: LazyResult<&str, i32> = LazyResult::success(1);
    /// assert_eq!(ok.into_result(), Ok(Ok(1)));
    ///
    /// let pending: LazyResult<&str, i32> = LazyResult::loading();
    /// assert_eq!(pending.into_result().unwrap_err().state(), State::Loading);
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<Result<A, E>, Unresolved> {
        match self {
            LazyResult::Initial => Err(Unresolved::new(State::Initial)),
            LazyResult::Loading => Err(Unresolved::new(State::Loading)),
            LazyResult::Failure(e) => Ok(Err(e)),
            LazyResult::Success(a) => Ok(Ok(a)),
        }
    }

    // ========== References ==========

    /// Convert `&LazyResult<E, A>` to `LazyResult<&E, &A>`.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let r: LazyResult<String, String> = LazyResult::success("hi".to_string());
    /// let len = r.as_ref().map_success(|s| s.len());
    /// assert_eq!(len, LazyResult::success(2));
    /// assert!(r.is_success());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> LazyResult<&E, &A> {
        match self {
            LazyResult::Initial => LazyResult::Initial,
            LazyResult::Loading => LazyResult::Loading,
            LazyResult::Failure(e) => LazyResult::Failure(e),
            LazyResult::Success(a) => LazyResult::Success(a),
        }
    }

    /// Convert `&mut LazyResult<E, A>` to `LazyResult<&mut E, &mut A>`.
    #[inline]
    pub fn as_mut(&mut self) -> LazyResult<&mut E, &mut A> {
        match self {
            LazyResult::Initial => LazyResult::Initial,
            LazyResult::Loading => LazyResult::Loading,
            LazyResult::Failure(e) => LazyResult::Failure(e),
            LazyResult::Success(a) => LazyResult::Success(a),
        }
    }

    /// Iterate over the success value, if present.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.value().into_iter()
    }

    /// Mutably iterate over the success value, if present.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut A> {
        self.as_mut().into_value().into_iter()
    }
}

impl<E, A> LazyResult<E, LazyResult<E, A>> {
    /// Remove one level of nesting.
    ///
    /// ```rust
    /// use lazy_result::LazyResult;
    ///
    /// let nested: LazyResult<&str, LazyResult<&str, i32>> =
    ///     LazyResult::success(LazyResult::loading());
    /// assert!(nested.flatten().is_loading());
    /// ```
    #[inline]
    pub fn flatten(self) -> LazyResult<E, A> {
        self.and_then(|inner| inner)
    }
}

// ========== Free constructors ==========

/// Shorthand for [`LazyResult::initial`].
#[inline]
pub fn initial<E, A>() -> LazyResult<E, A> {
    LazyResult::initial()
}

/// Shorthand for [`LazyResult::loading`].
#[inline]
pub fn loading<E, A>() -> LazyResult<E, A> {
    LazyResult::loading()
}

/// Shorthand for [`LazyResult::failure`].
///
/// ```rust
/// use lazy_result::{failure, LazyResult};
///
/// let r: LazyResult<&str, ()> = failure("oops");
/// assert_eq!(r, LazyResult::failure("oops"));
/// ```
#[inline]
pub fn failure<E, A>(error: E) -> LazyResult<E, A> {
    LazyResult::failure(error)
}

/// Shorthand for [`LazyResult::success`].
#[inline]
pub fn success<E, A>(value: A) -> LazyResult<E, A> {
    LazyResult::success(value)
}

// ========== Trait implementations ==========

impl<E: fmt::Display, A: fmt::Display> fmt::Display for LazyResult<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LazyResult::Initial => f.write_str("Initial"),
            LazyResult::Loading => f.write_str("Loading"),
            LazyResult::Failure(e) => write!(f, "Failure({})", e),
            LazyResult::Success(a) => write!(f, "Success({})", a),
        }
    }
}

impl<E, A> Default for LazyResult<E, A> {
    /// Returns `LazyResult::Initial`.
    fn default() -> Self {
        LazyResult::Initial
    }
}

impl<E, A> From<Result<A, E>> for LazyResult<E, A> {
    fn from(result: Result<A, E>) -> Self {
        LazyResult::from_result(result)
    }
}

impl<E, A> TryFrom<LazyResult<E, A>> for Result<A, E> {
    type Error = Unresolved;

    fn try_from(value: LazyResult<E, A>) -> Result<Self, Self::Error> {
        value.into_result()
    }
}

impl<E, A> IntoIterator for LazyResult<E, A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, E, A> IntoIterator for &'a LazyResult<E, A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}
