//! Foundation layer of a ray tracer.
//!
//! This crate bundles the building blocks every later stage of a ray tracer needs:
//!
//! - [`linalg`]: homogeneous [`Tuple`]s (points and vectors) and runtime-sized [`Matrix`]es with
//!   determinants and inverses.
//! - [`image`]: RGB [`Color`]s and the [`Canvas`] pixel grid, which can be written out as a
//!   plain-text PPM image.
//! - [`projectile`]: a small simulation that launches a projectile through a world with gravity and
//!   wind, and plots its trajectory onto a [`Canvas`]. It backs the `projectile` binary.
//!
//! # Coordinates
//!
//! Canvas coordinates have their origin in the top left corner: X points to the right, Y points
//! *down*. World coordinates used by [`projectile`] have Y pointing *up*.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: Overrides the log filter installed by [`init_logger!`], using the
//!   [`env_logger`] syntax.
//! * `RAYTRACER_CANVAS_SIZE`: Sets the size of the canvas the `projectile` binary plots into, as
//!   `<width>x<height>` (for example `640x480`). Defaults to `1000x1000`.
//!
//! [`Tuple`]: linalg::Tuple
//! [`Matrix`]: linalg::Matrix
//! [`Color`]: image::Color
//! [`Canvas`]: image::Canvas

use log::LevelFilter;

pub use raytracer_image as image;
pub use raytracer_linalg as linalg;

pub mod projectile;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("raytracer_image"), log_level)
        .filter(Some("raytracer_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and the raytracer crates will log at
/// *trace* level. Otherwise, they will log at *debug* level.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
