//! Approximate equality.
//!
//! Every equality check in this crate goes through [`approx_eq`], which treats two numbers as
//! equal when their absolute difference is strictly less than [`EPSILON`].

mod impls;

use std::{fmt, panic::Location};

/// Absolute tolerance used by [`approx_eq`] and the default mode of [`assert_approx_eq!`].
///
/// [`assert_approx_eq!`]: crate::assert_approx_eq
pub const EPSILON: f64 = 1e-5;

/// Returns whether `a` and `b` differ by less than [`EPSILON`].
///
/// Non-finite values are not special-cased: the difference of two infinities is NaN or
/// infinite, so an infinity is never equal to anything, itself included. NaN is never equal to
/// anything either.
///
/// # Examples
///
/// ```
/// # use raytracer_linalg::approx::approx_eq;
/// assert!(approx_eq(0.33333, 1.0 / 3.0));
/// assert!(!approx_eq(0.3333, 1.0 / 3.0));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their components are.
/// Types with a shape (like [`Matrix`][crate::Matrix]) are never equal to values of a different
/// shape.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// The values are considered equal if their absolute difference is at most `tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: f64) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// The values are considered equal if their absolute difference is at most the larger of the
    /// two magnitudes times `tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: f64) -> bool;

    /// Performs the crate-wide default comparison (see [`approx_eq`]).
    fn approx_eq(&self, other: &Rhs) -> bool;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Calling [`Asserter::abs`] or
/// [`Asserter::rel`] replaces the default comparison ([`ApproxEq::approx_eq`]) with an absolute or
/// relative comparison using the given tolerance. If both are called, the values are equal if
/// either comparison considers them equal.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<f64>,
    rel: Option<f64>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Compare the values by their absolute difference, using `abs` as the tolerance.
    pub fn abs(&mut self, abs: f64) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compare the values by their relative difference, using `rel` as the tolerance.
    ///
    /// Any non-zero number only compares equal to 0.0 with a relative tolerance of at least 1.0.
    pub fn rel(&mut self, rel: f64) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&self) -> bool {
        match (self.abs, self.rel) {
            (None, None) => self.left.approx_eq(self.right),
            (abs, rel) => {
                abs.is_some_and(|abs| self.left.abs_diff_eq(self.right, abs))
                    || rel.is_some_and(|rel| self.left.rel_diff_eq(self.right, rel))
            }
        }
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on destructors, which is why the location is captured in
    // `Asserter::new` instead.
    fn drop(&mut self) {
        let equal = self.equal();
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can switch the comparison to an
/// absolute or relative one with a custom tolerance.
///
/// # Examples
///
/// ```
/// # use raytracer_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use raytracer_linalg::*;
/// assert_approx_ne!(0.3333, 1.0 / 3.0);
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "my message")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "my message");
    }

    #[test]
    fn tolerance_is_exclusive() {
        assert!(approx_eq(1.0, 1.0 + 0.5e-5));
        assert!(!approx_eq(0.0, 2e-5));
        assert!(!approx_eq(1.0, 1.0 + 2.0 * EPSILON));
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
    }

    #[test]
    fn nan() {
        assert!(!approx_eq(f64::NAN, f64::NAN));
        assert!(!approx_eq(f64::NAN, 0.0));
        assert_approx_ne!(f64::NAN, f64::NAN).abs(1.0);
        assert_approx_ne!(f64::NAN, 0.0).rel(1.0);
    }

    #[test]
    fn inf() {
        assert!(!approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!approx_eq(f64::NEG_INFINITY, f64::NEG_INFINITY));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!approx_eq(f64::INFINITY, f64::MAX));
        // Explicit tolerances compare infinities by identity.
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX).abs(10000.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY).rel(10000.0);
    }
}
