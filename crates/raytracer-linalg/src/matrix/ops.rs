use std::ops::{Index, IndexMut};

use crate::{approx::ApproxEq, Matrix};

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.offset(row, col) {
            Some(i) => &self.data[i],
            None => panic!("{}", self.out_of_range(row, col)),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.offset(row, col) {
            Some(i) => &mut self.data[i],
            None => panic!("{}", self.out_of_range(row, col)),
        }
    }
}

/// Tolerance-based, see [`approx_eq`][crate::approx::approx_eq].
impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.approx_eq(other)
    }
}

impl ApproxEq for Matrix {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.data.as_slice().abs_diff_eq(other.data.as_slice(), tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.data.as_slice().rel_diff_eq(other.data.as_slice(), tolerance)
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.data.as_slice().approx_eq(other.data.as_slice())
    }
}
