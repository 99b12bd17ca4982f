//! Implementations of `std::ops`.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::approx::ApproxEq;

use super::Tuple;

impl Index<usize> for Tuple {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Tolerance-based, see [`approx_eq`][crate::approx::approx_eq].
impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ApproxEq for Tuple {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.0.rel_diff_eq(&other.0, tolerance)
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self.0.approx_eq(&other.0)
    }
}

/// Component-wise negation.
impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Self::Output {
        self.map(f64::neg)
    }
}

/// Component-wise addition.
impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Tuple) -> Self::Output {
        self.zip_with(rhs, |l, r| l + r)
    }
}

/// Component-wise subtraction.
impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Tuple) -> Self::Output {
        self.zip_with(rhs, |l, r| l - r)
    }
}

/// Tuple * Scalar.
impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|c| c * rhs)
    }
}

/// Tuple / Scalar.
impl Div<f64> for Tuple {
    type Output = Tuple;

    fn div(self, rhs: f64) -> Self::Output {
        self.map(|c| c / rhs)
    }
}
