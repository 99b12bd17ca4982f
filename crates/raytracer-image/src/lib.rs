//! Colors, pixel canvases and plain-text image output.
//!
//! # Overview
//!
//! [`Color`] is an RGB triple of unbounded floating-point channels. Intermediate results (like the
//! sum of several light contributions) are allowed to leave the displayable `0.0..=1.0` range;
//! values are only clamped when they are converted to 8-bit channels with [`Color::to_rgb8`].
//!
//! A [`Canvas`] is a fixed-size grid of [`Color`]s that starts out black. It can be serialized to
//! the plain-text PPM format ("P3") with [`Canvas::to_ppm`] or [`Canvas::write_ppm`]:
//!
//! ```
//! # use raytracer_image::*;
//! let mut canvas = Canvas::new(2, 1);
//! canvas.write_pixel(1, 0, Color::new(1.5, 0.5, -1.0));
//! assert_eq!(canvas.to_ppm(), "P3\n2 1\n255\n0 0 0 255 128 0\n");
//! ```

mod canvas;
mod color;
mod ppm;

pub use canvas::{Canvas, CanvasError};
pub use color::Color;
pub use ppm::{MAX_CHANNEL_VALUE, MAX_LINE_WIDTH};
