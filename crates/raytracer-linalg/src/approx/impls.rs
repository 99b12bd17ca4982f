use super::ApproxEq;

impl ApproxEq for f64 {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= tolerance
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return self == other;
        }

        let largest = f64::max(self.abs(), other.abs());
        (self - other).abs() <= largest * tolerance
    }

    fn approx_eq(&self, other: &Self) -> bool {
        super::approx_eq(*self, *other)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    fn abs_diff_eq(&self, other: &[U], tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }

    fn approx_eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.approx_eq(b))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    fn abs_diff_eq(&self, other: &[U; N], tolerance: f64) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], tolerance: f64) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), tolerance)
    }

    fn approx_eq(&self, other: &[U; N]) -> bool {
        self.as_slice().approx_eq(other.as_slice())
    }
}
