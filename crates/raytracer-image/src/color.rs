use std::{
    fmt,
    ops::{Add, Index, Mul, Sub},
};

use raytracer_linalg::approx::ApproxEq;

use crate::MAX_CHANNEL_VALUE;

/// A linear RGB color with floating-point channels.
///
/// Channels are nominally in range `0.0..=1.0`, but are not clamped: arithmetic may produce
/// negative values or values above 1.0. Clamping happens when converting to 8-bit channels via
/// [`Color::to_rgb8`].
///
/// Equality is approximate, using the same tolerance as tuples and matrices (see
/// [`approx_eq`][raytracer_linalg::approx::approx_eq]).
#[derive(Clone, Copy, Default)]
pub struct Color([f64; 3]);

impl Color {
    pub const BLACK: Self = Self([0.0, 0.0, 0.0]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0]);
    pub const RED: Self = Self([1.0, 0.0, 0.0]);
    pub const GREEN: Self = Self([0.0, 1.0, 0.0]);
    pub const BLUE: Self = Self([0.0, 0.0, 1.0]);

    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self([red, green, blue])
    }

    #[inline]
    pub const fn red(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub const fn green(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub const fn blue(&self) -> f64 {
        self.0[2]
    }

    fn zip_with(self, other: Self, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        let [a, b] = [self.0, other.0];
        Self([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2])])
    }

    /// Converts each channel to an integer in range `0..=255`.
    ///
    /// Every channel is scaled by 255, rounded half away from zero, and clamped. NaN channels
    /// become 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_image::Color;
    /// assert_eq!(Color::new(1.5, 0.5, -0.5).to_rgb8(), [255, 128, 0]);
    /// assert_eq!(Color::new(1.0, 0.8, 0.6).to_rgb8(), [255, 204, 153]);
    /// ```
    pub fn to_rgb8(self) -> [u8; 3] {
        self.0.map(channel_to_u8)
    }
}

fn channel_to_u8(c: f64) -> u8 {
    let max = f64::from(MAX_CHANNEL_VALUE);
    // `as` saturates and maps NaN to 0.
    (c * max).round().clamp(0.0, max) as u8
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "Color({r:?}, {g:?}, {b:?})")
    }
}

impl Index<usize> for Color {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ApproxEq for Color {
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

/// Channel-wise addition.
impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        self.zip_with(rhs, |l, r| l + r)
    }
}

/// Channel-wise subtraction.
impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        self.zip_with(rhs, |l, r| l - r)
    }
}

/// Color * Scalar.
impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Self(self.0.map(|c| c * rhs))
    }
}

/// Channel-wise multiplication (Hadamard product), used to blend colors.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.zip_with(rhs, |l, r| l * r)
    }
}

#[cfg(test)]
mod tests {
    use raytracer_linalg::{assert_approx_eq, assert_approx_ne};

    use super::*;

    #[test]
    fn channels() {
        let c = Color::new(-0.5, 0.4, 1.7);
        assert_eq!(c.red(), -0.5);
        assert_eq!(c.green(), 0.4);
        assert_eq!(c.blue(), 1.7);
        assert_eq!([c[0], c[1], c[2]], [-0.5, 0.4, 1.7]);
    }

    #[test]
    fn arithmetic() {
        let c1 = Color::new(0.9, 0.6, 0.75);
        let c2 = Color::new(0.7, 0.1, 0.25);
        assert_eq!(c1 + c2, Color::new(1.6, 0.7, 1.0));
        assert_eq!(c1 - c2, Color::new(0.2, 0.5, 0.5));
        assert_eq!(Color::new(0.2, 0.3, 0.4) * 2.0, Color::new(0.4, 0.6, 0.8));
        assert_eq!(
            Color::new(1.0, 0.2, 0.4) * Color::new(0.9, 1.0, 0.1),
            Color::new(0.9, 0.2, 0.04)
        );
    }

    #[test]
    fn equality() {
        assert_eq!(Color::new(0.33333, 0.0, 0.0), Color::new(1.0 / 3.0, 0.0, 0.0));
        assert_ne!(Color::new(0.3333, 0.0, 0.0), Color::new(1.0 / 3.0, 0.0, 0.0));
        assert_approx_eq!(Color::new(0.5, 0.5, 0.5), Color::new(0.51, 0.5, 0.5)).abs(0.02);
        assert_approx_ne!(Color::WHITE, Color::BLACK);
    }

    #[test]
    fn to_rgb8() {
        assert_eq!(Color::BLACK.to_rgb8(), [0, 0, 0]);
        assert_eq!(Color::WHITE.to_rgb8(), [255, 255, 255]);
        assert_eq!(Color::new(1.5, 0.0, 0.0).to_rgb8(), [255, 0, 0]);
        assert_eq!(Color::new(0.0, 0.5, 0.0).to_rgb8(), [0, 128, 0]);
        assert_eq!(Color::new(-0.5, 0.0, 1.0).to_rgb8(), [0, 0, 255]);
        assert_eq!(Color::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY).to_rgb8(), [0, 255, 0]);
    }
}
