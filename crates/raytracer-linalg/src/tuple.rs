use std::fmt;

mod ops;

/// Creates a point (a [`Tuple`] with `w = 1`).
///
/// # Examples
///
/// ```
/// # use raytracer_linalg::*;
/// let p = point(4.0, -4.0, 3.0);
/// assert!(p.is_point());
/// assert_eq!(p, Tuple::new(4.0, -4.0, 3.0, 1.0));
/// ```
#[inline]
pub const fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::point(x, y, z)
}

/// Creates a vector (a [`Tuple`] with `w = 0`).
///
/// # Examples
///
/// ```
/// # use raytracer_linalg::*;
/// let v = vector(4.0, -4.0, 3.0);
/// assert!(v.is_vector());
/// assert_eq!(v, Tuple::new(4.0, -4.0, 3.0, 0.0));
/// ```
#[inline]
pub const fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::vector(x, y, z)
}

/// A homogeneous 4-component tuple `(x, y, z, w)`.
///
/// By convention, `w` is `1.0` for points and `0.0` for vectors. The general constructor
/// [`Tuple::new`] accepts any `w`, which is what raw algebra (like the result of a matrix
/// transform) produces.
///
/// Tuples are immutable values. All arithmetic is available through the usual operators and
/// returns a new [`Tuple`]:
///
/// ```
/// # use raytracer_linalg::*;
/// let p = point(3.0, 2.0, 1.0);
/// let v = vector(5.0, 6.0, 7.0);
/// assert_eq!(p - v, point(-2.0, -4.0, -6.0));
/// assert_eq!(-v * 2.0, vector(-10.0, -12.0, -14.0));
/// ```
///
/// Equality is approximate, see the [crate-level documentation](crate#equality).
#[derive(Clone, Copy, Default)]
pub struct Tuple([f64; 4]);

impl Tuple {
    /// The tuple with all four components set to zero (the zero vector).
    pub const ZERO: Self = Self([0.0; 4]);

    /// Creates a tuple from its four components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self([x, y, z, w])
    }

    /// Creates a point at `(x, y, z)`.
    #[inline]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z, 1.0])
    }

    /// Creates a vector with components `(x, y, z)`.
    #[inline]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z, 0.0])
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub const fn w(&self) -> f64 {
        self.0[3]
    }

    /// Returns the components as an array `[x, y, z, w]`.
    #[inline]
    pub const fn into_array(self) -> [f64; 4] {
        self.0
    }

    /// Returns whether this tuple is a point.
    ///
    /// This checks for `w == 1.0` *exactly*. Only tuples created by [`Tuple::point`] (and
    /// arithmetic that preserves `w` exactly) are guaranteed to pass.
    pub fn is_point(&self) -> bool {
        self.w() == 1.0
    }

    /// Returns whether this tuple is a vector.
    ///
    /// This checks for `w == 0.0` *exactly*, like [`Tuple::is_point`].
    pub fn is_vector(&self) -> bool {
        self.w() == 0.0
    }

    /// Applies a closure to each component, returning a new tuple.
    pub fn map(self, f: impl FnMut(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    fn zip_with(self, other: Self, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        let [a, b] = [self.0, other.0];
        Self([
            f(a[0], b[0]),
            f(a[1], b[1]),
            f(a[2], b[2]),
            f(a[3], b[3]),
        ])
    }

    /// Returns the Euclidean length of the tuple, taken over all four components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// assert_eq!(vector(0.0, 1.0, 0.0).magnitude(), 1.0);
    /// assert_approx_eq!(vector(-1.0, -2.0, -3.0).magnitude(), 14f64.sqrt());
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Divides this tuple by its magnitude, resulting in a unit-length tuple.
    ///
    /// A zero-length tuple is not special-cased: every component of the result is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// assert_eq!(vector(4.0, 0.0, 0.0).normalize(), vector(1.0, 0.0, 0.0));
    /// assert_eq!(vector(1.0, 2.0, 3.0).normalize(), vector(0.26726, 0.53452, 0.80178));
    /// ```
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// Unlike a strictly 3-dimensional dot product, this also multiplies the `w` components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// assert_eq!(vector(1.0, 2.0, 3.0).dot(vector(2.0, 3.0, 4.0)), 20.0);
    /// assert_eq!(Tuple::new(1.0, 0.0, 0.0, 2.0).dot(Tuple::new(1.0, 0.0, 0.0, 3.0)), 7.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Computes the 3-dimensional cross product of `self` and `other`.
    ///
    /// Only the `x`, `y` and `z` components of the operands are used. The result is always a
    /// vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_linalg::*;
    /// let a = vector(1.0, 2.0, 3.0);
    /// let b = vector(2.0, 3.0, 4.0);
    /// assert_eq!(a.cross(b), vector(-1.0, 2.0, -1.0));
    /// assert_eq!(b.cross(a), vector(1.0, -2.0, 1.0));
    /// ```
    pub fn cross(self, other: Self) -> Self {
        Self::vector(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl From<[f64; 4]> for Tuple {
    #[inline]
    fn from(components: [f64; 4]) -> Self {
        Self(components)
    }
}

impl From<Tuple> for [f64; 4] {
    #[inline]
    fn from(tuple: Tuple) -> Self {
        tuple.0
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.0;
        write!(f, "Tuple({x:?}, {y:?}, {z:?}, {w:?})")
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne};

    use super::*;

    #[test]
    fn constructors() {
        let p = point(4.3, -4.2, 3.1);
        assert_eq!(p.into_array(), [4.3, -4.2, 3.1, 1.0]);
        assert!(p.is_point());
        assert!(!p.is_vector());

        let v = vector(4.3, -4.2, 3.1);
        assert_eq!(v.into_array(), [4.3, -4.2, 3.1, 0.0]);
        assert!(v.is_vector());
        assert!(!v.is_point());

        let t = Tuple::new(1.0, 2.0, 3.0, 0.5);
        assert!(!t.is_point());
        assert!(!t.is_vector());
    }

    #[test]
    fn point_and_vector_predicates_are_exact() {
        let almost = Tuple::new(0.0, 0.0, 0.0, 1.0 - 1e-9);
        assert_eq!(almost, point(0.0, 0.0, 0.0));
        assert!(!almost.is_point());
    }

    #[test]
    fn equality() {
        assert_eq!(Tuple::new(3.0, -2.0, 5.0, 1.0), Tuple::new(3.0, -2.0, 5.0, 1.0));
        assert_eq!(
            Tuple::new(0.33333, -2.0, 5.0, 1.0),
            Tuple::new(1.0 / 3.0, -2.0, 5.0, 1.0)
        );
        assert_ne!(Tuple::new(3.0, -2.0, 5.0, 1.0), Tuple::new(4.0, -2.0, 5.0, 1.0));
        assert_ne!(point(1.0, 2.0, 3.0), vector(1.0, 2.0, 3.0));
    }

    #[test]
    fn addition() {
        let sum = Tuple::new(3.0, -2.0, 5.0, 1.0) + Tuple::new(-2.0, 3.0, 1.0, 0.0);
        assert_eq!(sum.into_array(), [1.0, 1.0, 6.0, 1.0]);
    }

    #[test]
    fn subtraction() {
        assert_eq!(
            point(3.0, 2.0, 1.0) - point(5.0, 6.0, 7.0),
            vector(-2.0, -4.0, -6.0)
        );
        assert_eq!(
            point(3.0, 2.0, 1.0) - vector(5.0, 6.0, 7.0),
            point(-2.0, -4.0, -6.0)
        );
        assert_eq!(
            vector(3.0, 2.0, 1.0) - vector(5.0, 6.0, 7.0),
            vector(-2.0, -4.0, -6.0)
        );
        assert_eq!(Tuple::ZERO - vector(1.0, -2.0, 3.0), vector(-1.0, 2.0, -3.0));
    }

    #[test]
    fn negation() {
        assert_eq!(
            -Tuple::new(1.0, -2.0, 3.0, -4.0),
            Tuple::new(-1.0, 2.0, -3.0, 4.0)
        );
    }

    #[test]
    fn scalar_mul_div() {
        let t = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(t * 3.5, Tuple::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(t * 0.5, Tuple::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(t / 2.0, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn magnitude() {
        assert_eq!(vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_eq!(vector(0.0, 1.0, 0.0).magnitude(), 1.0);
        assert_eq!(vector(0.0, 0.0, 1.0).magnitude(), 1.0);
        assert_approx_eq!(vector(1.0, 2.0, 3.0).magnitude(), 14f64.sqrt());
        assert_approx_eq!(vector(-1.0, -2.0, -3.0).magnitude(), 14f64.sqrt());
        assert_approx_eq!(Tuple::new(1.0, 1.0, 1.0, 1.0).magnitude(), 2.0);
    }

    #[test]
    fn normalize() {
        assert_eq!(vector(4.0, 0.0, 0.0).normalize(), vector(1.0, 0.0, 0.0));
        assert_eq!(
            vector(1.0, 2.0, 3.0).normalize(),
            vector(0.26726, 0.53452, 0.80178)
        );
        assert_approx_eq!(vector(1.0, 2.0, 3.0).normalize().magnitude(), 1.0);
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Tuple::ZERO.normalize();
        assert!(n.into_array().iter().all(|c| c.is_nan()));
        assert_ne!(n, n);
    }

    #[test]
    fn infinite_components_are_never_equal() {
        let t = vector(f64::INFINITY, 0.0, 0.0);
        assert_ne!(t, t);
        assert_ne!(point(0.0, f64::NEG_INFINITY, 0.0), point(0.0, f64::NEG_INFINITY, 0.0));
    }

    #[test]
    fn dot_and_cross() {
        let a = vector(1.0, 2.0, 3.0);
        let b = vector(2.0, 3.0, 4.0);
        assert_eq!(a.dot(b), 20.0);
        assert_eq!(a.cross(b), vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(a), vector(1.0, -2.0, 1.0));
        assert_eq!(b.cross(a), -a.cross(b));

        // `w` takes part in the dot product but is ignored by the cross product.
        let p = point(1.0, 2.0, 3.0);
        assert_eq!(p.dot(p), 15.0);
        assert!(p.cross(point(2.0, 3.0, 4.0)).is_vector());
    }

    #[test]
    fn random_add_sub_roundtrip() {
        let mut rng = fastrand::Rng::with_seed(0x5eed_7u64);
        let mut component = || (rng.f64() - 0.5) * 200.0;
        for _ in 0..100 {
            let t1 = Tuple::new(component(), component(), component(), component());
            let t2 = Tuple::new(component(), component(), component(), component());
            assert_eq!((t1 + t2) - t2, t1);
        }
    }

    #[test]
    fn random_normalized_length() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..100 {
            let v = vector(rng.f64() + 0.1, rng.f64() - 0.5, -rng.f64());
            assert_approx_eq!(v.normalize().magnitude(), 1.0);
        }
    }

    #[test]
    fn approx_tolerances() {
        let a = vector(1.0, 2.0, 3.0);
        let b = vector(1.001, 2.0, 3.0);
        assert_approx_ne!(a, b);
        assert_approx_eq!(a, b).abs(0.01);
        assert_approx_eq!(a, b).rel(0.001);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", point(1.0, 2.5, -3.0)), "Tuple(1.0, 2.5, -3.0, 1.0)");
    }
}
