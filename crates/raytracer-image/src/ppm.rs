//! Plain-text PPM ("P3") encoding.
//!
//! The output consists of a 3-line header (`P3`, `<width> <height>`, and the maximum channel value)
//! followed by one line per canvas row, holding the red, green and blue channel of every pixel in
//! that row as decimal integers separated by single spaces. Lines longer than [`MAX_LINE_WIDTH`]
//! characters are wrapped between two numbers. The output always ends with a newline.

use std::{convert::Infallible, fmt::Write as _, io};

use crate::Canvas;

/// The maximum channel value written to the PPM header. Channels are scaled to `0..=255`.
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// No line of PPM output is longer than this many characters.
pub const MAX_LINE_WIDTH: usize = 70;

const MAGIC: &str = "P3";

impl Canvas {
    /// Encodes this canvas as a plain-text PPM image.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer_image::*;
    /// let canvas = Canvas::new(5, 3);
    /// let ppm = canvas.to_ppm();
    /// assert!(ppm.starts_with("P3\n5 3\n255\n"));
    /// assert!(ppm.ends_with("0 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n"));
    /// ```
    pub fn to_ppm(&self) -> String {
        // Up to 3 digits and a separator for each channel.
        let mut out = String::with_capacity(32 + self.width() as usize * self.height() as usize * 12);
        let res: Result<(), Infallible> = self.encode_ppm(|chunk| {
            out.push_str(chunk);
            Ok(())
        });
        match res {
            Ok(()) => out,
            Err(never) => match never {},
        }
    }

    /// Writes this canvas as a plain-text PPM image to `writer`.
    ///
    /// The output is identical to [`Canvas::to_ppm`], but is written row by row without building
    /// the whole image in memory.
    pub fn write_ppm<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        self.encode_ppm(|chunk| writer.write_all(chunk.as_bytes()))?;
        writer.flush()
    }

    fn encode_ppm<E>(&self, mut sink: impl FnMut(&str) -> Result<(), E>) -> Result<(), E> {
        log::debug!(
            "encoding {}x{} canvas as PPM",
            self.width(),
            self.height()
        );

        sink(&format!(
            "{MAGIC}\n{} {}\n{MAX_CHANNEL_VALUE}\n",
            self.width(),
            self.height()
        ))?;

        let mut wrapper = LineWrapper::new(MAX_LINE_WIDTH);
        for row in self.rows() {
            wrapper.start_row();
            for channel in row.iter().flat_map(|color| color.to_rgb8()) {
                wrapper.push(channel);
            }
            sink(wrapper.finish_row())?;
        }
        Ok(())
    }
}

/// Greedily wraps the numbers of one image row into lines of at most `max_width` characters.
///
/// The decision is made per number: if a number (with its leading space) does not fit on the
/// current line anymore, the line is ended without trailing whitespace and the number starts the
/// next line.
struct LineWrapper {
    max_width: usize,
    buf: String,
    /// Byte offset in `buf` where the current line starts.
    line_start: usize,
    /// Scratch buffer holding the decimal text of the number being pushed.
    token: String,
}

impl LineWrapper {
    fn new(max_width: usize) -> Self {
        Self {
            max_width,
            buf: String::new(),
            line_start: 0,
            token: String::with_capacity(3),
        }
    }

    fn start_row(&mut self) {
        self.buf.clear();
        self.line_start = 0;
    }

    fn push(&mut self, value: u8) {
        self.token.clear();
        // Formatting into a `String` never fails.
        let _ = write!(self.token, "{value}");

        let line_len = self.buf.len() - self.line_start;
        if line_len > 0 {
            if line_len + 1 + self.token.len() > self.max_width {
                self.buf.push('\n');
                self.line_start = self.buf.len();
            } else {
                self.buf.push(' ');
            }
        }
        self.buf.push_str(&self.token);
    }

    /// Terminates the row and returns its text, including the final newline.
    fn finish_row(&mut self) -> &str {
        self.buf.push('\n');
        &self.buf
    }
}
