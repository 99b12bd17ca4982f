use itertools::Itertools;
use thiserror::Error;

use crate::Color;

/// Error returned by checked [`Canvas`] accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    #[error("pixel ({x}, {y}) is out of range for a {width}x{height} canvas")]
    IndexOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// A `width x height` grid of [`Color`]s.
///
/// Pixels are addressed by `(x, y)`, where `x` is the column (growing to the right) and `y` is the
/// row (growing downwards). Every pixel is black when the canvas is created.
///
/// [`Canvas::pixel_at`] and [`Canvas::write_pixel`] panic when given coordinates outside of the
/// canvas. [`Canvas::get`] and [`Canvas::try_write_pixel`] can be used for checked access instead.
#[derive(Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Row-major pixel storage.
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a black canvas of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        log::trace!("creating {width}x{height} canvas");
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Returns the width of this canvas, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of this canvas, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    fn out_of_range(&self, x: u32, y: u32) -> CanvasError {
        CanvasError::IndexOutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside of the canvas.
    #[track_caller]
    pub fn pixel_at(&self, x: u32, y: u32) -> Color {
        match self.get(x, y) {
            Some(color) => color,
            None => panic!("{}", self.out_of_range(x, y)),
        }
    }

    /// Sets the pixel at `(x, y)` to `color`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside of the canvas.
    #[track_caller]
    pub fn write_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Err(e) = self.try_write_pixel(x, y, color) {
            panic!("{e}");
        }
    }

    /// Returns the color of the pixel at `(x, y)`, or [`None`] if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Sets the pixel at `(x, y)` to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::IndexOutOfRange`] if `(x, y)` lies outside of the canvas. The canvas
    /// is left unchanged in that case.
    pub fn try_write_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), CanvasError> {
        let i = self.index(x, y).ok_or_else(|| self.out_of_range(x, y))?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Sets every pixel of the canvas to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Returns an iterator over all pixel positions and their colors.
    ///
    /// Pixels are yielded row by row, from top to bottom, and from left to right within each row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        (0..self.height)
            .cartesian_product(0..self.width)
            .zip(&self.pixels)
            .map(|((y, x), color)| (x, y, *color))
    }

    /// Returns the pixels of each row, from top to bottom.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        // `chunks` rejects a chunk size of 0; a zero-width canvas still has `height` (empty) rows.
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.pixels[y * width..][..width])
    }
}
