//! Tuple and matrix algebra for the raytracer.
//!
//! # Overview
//!
//! - [`Tuple`] is a homogeneous 4-component value. Points have `w = 1`, vectors have `w = 0`. Use
//!   [`point`] and [`vector`] (or [`Tuple::point`] and [`Tuple::vector`]) to create them; only
//!   those constructors guarantee that [`Tuple::is_point`] and [`Tuple::is_vector`] hold exactly.
//! - [`Matrix`] is a dense, row-major matrix whose dimensions are chosen at runtime. It supports
//!   multiplication, transposition and inversion via cofactor expansion.
//! - The [`approx`] module contains the tolerance comparison every type in this crate uses for
//!   equality.
//!
//! # Equality
//!
//! All values here are produced by floating-point arithmetic, so [`PartialEq`] on [`Tuple`] and
//! [`Matrix`] is *approximate*: two values are equal when every component differs by less than
//! [`approx::EPSILON`]. This relation is not transitive, so neither type implements [`Eq`].
//!
//! # Numeric Degeneracies
//!
//! Some operations are not defended against degenerate input. Normalizing a zero vector and
//! inverting a singular matrix divide by zero; the resulting infinities and NaNs propagate through
//! later arithmetic instead of being reported as errors.

pub mod approx;
mod error;
mod matrix;
mod tuple;

pub use error::Error;
pub use matrix::*;
pub use tuple::*;
