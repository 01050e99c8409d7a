// src/canvas/mod.rs

//! A fixed-size grid of `Color` values.
//!
//! Pixels are stored row-major (`index = y * width + x`). `Color` is `Copy`,
//! so `write_pixel` stores its own value and `pixel_at` hands back a copy;
//! nothing outside the canvas can alias its buffer.

pub mod ppm;

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, trace};

use crate::color::Color;
use crate::error::{CanvasError, Result};
use crate::sink::TextSink;

/// A value usable as a pixel coordinate.
///
/// Integer types are always whole numbers. Floats are accepted so that
/// simulation code can pass computed positions straight through, but they
/// must carry no fractional part.
pub trait PixelCoord: Copy {
    fn to_f64(self) -> f64;

    fn is_whole(self) -> bool;
}

macro_rules! impl_pixel_coord_for_int {
    ($($t:ty),*) => {
        $(
            impl PixelCoord for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_whole(self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_pixel_coord_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl PixelCoord for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_whole(self) -> bool {
        self.is_finite() && self.fract() == 0.0
    }
}

impl PixelCoord for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn is_whole(self) -> bool {
        self.is_finite() && self.fract() == 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a canvas with every pixel set to black.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = CanvasError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        // The buffer may not exceed isize::MAX bytes.
        let len = width
            .checked_mul(height)
            .filter(|len| {
                len.checked_mul(std::mem::size_of::<Color>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(invalid)?;
        debug!("Canvas: created {}x{}", width, height);
        Ok(Self {
            width,
            height,
            pixels: vec![Color::BLACK; len],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    /// Overwrites the pixel at `(x, y)`. On error the buffer is untouched.
    pub fn write_pixel<C: PixelCoord>(&mut self, x: C, y: C, color: Color) -> Result<()> {
        let idx = self.index_of(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    pub fn pixel_at<C: PixelCoord>(&self, x: C, y: C) -> Result<Color> {
        let idx = self.index_of(x, y)?;
        Ok(self.pixels[idx])
    }

    /// Iterates rows top to bottom, each a slice of `width` pixels.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width)
    }

    /// Encodes the canvas as a plain-text P3 image.
    pub fn to_ppm(&self) -> String {
        ppm::encode(self)
    }

    /// Encodes the canvas and hands it to `sink` as `<name>.ppm`.
    ///
    /// `name` falls back to the sink's default file stem; `dir` is resolved
    /// by the sink. Returns the path written.
    pub fn write_to_sink<S: TextSink + ?Sized>(
        &self,
        sink: &S,
        name: Option<&str>,
        dir: Option<&Path>,
    ) -> anyhow::Result<PathBuf> {
        let dir_path = sink.resolve_dir(dir);
        sink.ensure_directory_exists(&dir_path)
            .with_context(|| format!("Failed to create output directory {}", dir_path.display()))?;

        let file_name = format!("{}.{}", name.unwrap_or(sink.default_name()), ppm::PPM_EXTENSION);
        let file_path = dir_path.join(file_name);
        let written = sink
            .write_text_file(&file_path, &self.to_ppm())
            .with_context(|| format!("Failed to write canvas to {}", file_path.display()))?;
        debug!("Canvas: wrote {}x{} image to {}", self.width, self.height, written.display());
        Ok(written)
    }

    fn index_of<C: PixelCoord>(&self, x: C, y: C) -> Result<usize> {
        let (fx, fy) = (x.to_f64(), y.to_f64());
        if !x.is_whole() || !y.is_whole() {
            return Err(CanvasError::NonIntegerIndex { x: fx, y: fy });
        }
        if fx < 0.0 || fx >= self.width as f64 || fy < 0.0 || fy >= self.height as f64 {
            trace!("Canvas: rejected ({}, {}) outside {}x{}", fx, fy, self.width, self.height);
            return Err(CanvasError::OutOfBounds {
                x: fx,
                y: fy,
                width: self.width,
                height: self.height,
            });
        }
        Ok(fy as usize * self.width + fx as usize)
    }
}
