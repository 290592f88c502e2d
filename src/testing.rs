//! Testing utilities for code that holds `LazyResult` values.
//!
//! Assertion macros that report the actual state on failure, and (with the
//! `proptest` feature) an `Arbitrary` implementation covering all four
//! variants.
//!
//! ```rust
//! use lazy_result::{LazyResult, assert_loading, assert_success};
//!
//! let r = LazyResult::<String, i32>::loading();
//! assert_loading!(r);
//!
//! let r = LazyResult::<String, i32>::success(42);
//! assert_success!(r, 42);
//! ```

/// Assert that a `LazyResult` is `Initial`.
///
/// # Example
///
/// ```rust
/// use lazy_result::{LazyResult, assert_initial};
///
/// assert_initial!(LazyResult::<(), ()>::initial());
/// ```
#[macro_export]
macro_rules! assert_initial {
    ($result:expr) => {
        match $result {
            $crate::LazyResult::Initial => {}
            other => {
                panic!("Expected Initial, got {}", other.state());
            }
        }
    };
}

/// Assert that a `LazyResult` is `Loading`.
///
/// # Example
///
/// ```rust
/// use lazy_result::{LazyResult, assert_loading};
///
/// assert_loading!(LazyResult::<(), ()>::loading());
/// ```
#[macro_export]
macro_rules! assert_loading {
    ($result:expr) => {
        match $result {
            $crate::LazyResult::Loading => {}
            other => {
                panic!("Expected Loading, got {}", other.state());
            }
        }
    };
}

/// Assert that a `LazyResult` is a `Success`, optionally with a given value.
///
/// # Example
///
/// ```rust
/// use lazy_result::{LazyResult, assert_success};
///
/// let r = LazyResult::<String, _>::success(vec![1, 2]);
/// assert_success!(r.clone());
/// assert_success!(r, vec![1, 2]);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        match $result {
            $crate::LazyResult::Success(_) => {}
            $crate::LazyResult::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
            other => {
                panic!("Expected Success, got {}", other.state());
            }
        }
    };
    ($result:expr, $expected:expr) => {
        match $result {
            $crate::LazyResult::Success(v) => {
                assert_eq!(v, $expected);
            }
            $crate::LazyResult::Failure(e) => {
                panic!(
                    "Expected Success with value {:?}, got Failure: {:?}",
                    $expected, e
                );
            }
            other => {
                panic!(
                    "Expected Success with value {:?}, got {}",
                    $expected,
                    other.state()
                );
            }
        }
    };
}

/// Assert that a `LazyResult` is a `Failure`, optionally with a given error.
///
/// # Example
///
/// ```rust
/// use lazy_result::{LazyResult, assert_failure};
///
/// let r = LazyResult::<_, i32>::failure("oops");
/// assert_failure!(r);
/// assert_failure!(r, "oops");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        match $result {
            $crate::LazyResult::Failure(_) => {}
            $crate::LazyResult::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
            other => {
                panic!("Expected Failure, got {}", other.state());
            }
        }
    };
    ($result:expr, $expected:expr) => {
        match $result {
            $crate::LazyResult::Failure(e) => {
                assert_eq!(e, $expected);
            }
            $crate::LazyResult::Success(v) => {
                panic!(
                    "Expected Failure with error {:?}, got Success: {:?}",
                    $expected, v
                );
            }
            other => {
                panic!(
                    "Expected Failure with error {:?}, got {}",
                    $expected,
                    other.state()
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::LazyResult;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<E, A> Arbitrary for LazyResult<E, A>
where
    E: Arbitrary + Clone + 'static,
    A: Arbitrary + Clone + 'static,
{
    type Parameters = (E::Parameters, A::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (e_params, a_params) = args;
        prop_oneof![
            Just(LazyResult::Initial),
            Just(LazyResult::Loading),
            any_with::<E>(e_params).prop_map(LazyResult::failure),
            any_with::<A>(a_params).prop_map(LazyResult::success),
        ]
        .boxed()
    }
}
