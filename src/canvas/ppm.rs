// src/canvas/ppm.rs

//! Plain-text P3 encoder.
//!
//! Output layout:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! r g b r g b ...      one row of pixels, wrapped at 70 columns
//! ```
//!
//! A row's tokens are space separated. When appending the next token would
//! push the physical line past `PPM_LINE_LIMIT`, a newline replaces the space.
//! Tokens are never split. Every row ends with a newline.

use log::trace;

use super::Canvas;
use crate::color::Color;

pub const PPM_MAGIC: &str = "P3";
pub const PPM_MAX_COLOR: u8 = 255;
pub const PPM_LINE_LIMIT: usize = 70;
pub const PPM_EXTENSION: &str = "ppm";

/// Maps a linear channel onto `0..=255`.
///
/// Out-of-range inputs saturate; in-range values round to the nearest step,
/// so 0.5 becomes 128. NaN maps to 0.
pub fn channel_to_byte(value: f64) -> u8 {
    let max = PPM_MAX_COLOR as f64;
    // `as u8` saturates and sends NaN to 0.
    (value * max).round().clamp(0.0, max) as u8
}

pub fn header(width: usize, height: usize) -> String {
    format!("{}\n{} {}\n{}\n", PPM_MAGIC, width, height, PPM_MAX_COLOR)
}

pub fn encode(canvas: &Canvas) -> String {
    let mut out = header(canvas.width(), canvas.height());
    for row in canvas.rows() {
        let mut writer = RowWriter::new(&mut out);
        for pixel in row {
            writer.push_pixel(pixel);
        }
        writer.finish();
    }
    trace!("ppm: encoded {} bytes", out.len());
    out
}

/// Appends one canvas row to the output, wrapping physical lines.
struct RowWriter<'a> {
    out: &'a mut String,
    line_len: usize,
}

impl<'a> RowWriter<'a> {
    fn new(out: &'a mut String) -> Self {
        Self {
            out,
            line_len: 0,
        }
    }

    fn push_pixel(&mut self, pixel: &Color) {
        for channel in [pixel.r, pixel.g, pixel.b] {
            self.push_token(channel_to_byte(channel));
        }
    }

    fn push_token(&mut self, value: u8) {
        let token = value.to_string();
        if self.line_len > 0 {
            if self.line_len + 1 + token.len() > PPM_LINE_LIMIT {
                self.out.push('\n');
                self.line_len = 0;
            } else {
                self.out.push(' ');
                self.line_len += 1;
            }
        }
        self.out.push_str(&token);
        self.line_len += token.len();
    }

    fn finish(self) {
        self.out.push('\n');
    }
}
