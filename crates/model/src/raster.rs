//! RGBA raster buffers.
//!
//! A [`RasterBuffer`] wraps an [`RgbaImage`]: a row-major grid of 8-bit RGBA
//! pixels, four bytes per pixel, rows top to bottom. Drawing code borrows
//! the image directly, and PNG files load into it without copying.

use image::RgbaImage;

pub use image::Rgba;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Fully transparent black, the value of an untouched surface.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Opaque black pencil ink.
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Errors raised when building a raster from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("raster must be at least 1x1, got {width}x{height}")]
    ZeroSized { width: u32, height: u32 },

    #[error("raster {width}x{height} needs {expected} bytes, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// A non-empty width×height RGBA8 pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    image: RgbaImage,
}

impl RasterBuffer {
    /// Create a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        ensure_non_empty(width, height)?;
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    /// Wrap raw RGBA bytes. The length must match the dimensions exactly.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        ensure_non_empty(width, height)?;
        let expected = width as usize * height as usize * CHANNELS;
        let actual = data.len();
        let mismatch = RasterError::DimensionMismatch {
            width,
            height,
            expected,
            actual,
        };
        if actual != expected {
            return Err(mismatch);
        }
        let image = RgbaImage::from_raw(width, height, data).ok_or(mismatch)?;
        Ok(Self { image })
    }

    /// Take ownership of a decoded image.
    pub fn from_image(image: RgbaImage) -> Result<Self, RasterError> {
        ensure_non_empty(image.width(), image.height())?;
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Mutable access for drawing routines.
    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Read a pixel, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Write a pixel. Writes outside the buffer are dropped and return `false`.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) -> bool {
        match self.image.get_pixel_mut_checked(x, y) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    /// Alpha channel of the pixel at `(x, y)`; zero outside the buffer.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y).map(|p| p[3]).unwrap_or_default()
    }

    /// Replace the red channel with `255 - red`. Returns the new red value.
    pub fn invert_red(&mut self, x: u32, y: u32) -> Option<u8> {
        let pixel = self.image.get_pixel_mut_checked(x, y)?;
        pixel[0] = 255 - pixel[0];
        Some(pixel[0])
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = TRANSPARENT;
        }
    }

    /// Whether no pixel carries any alpha.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p[3] == 0)
    }

    /// Number of rows containing at least one non-transparent pixel.
    pub fn inked_rows(&self) -> usize {
        self.image
            .rows()
            .map(|mut row| row.any(|p| p[3] != 0))
            .filter(|&inked| inked)
            .count()
    }

    /// Copy every non-transparent pixel of `top` over this buffer.
    ///
    /// Both buffers must share dimensions; the layer stacking is binary,
    /// so partially transparent pixels replace rather than blend.
    pub fn overlay(&mut self, top: &RasterBuffer) -> Result<(), RasterError> {
        if top.image.dimensions() != self.image.dimensions() {
            return Err(RasterError::DimensionMismatch {
                width: self.width(),
                height: self.height(),
                expected: self.image.as_raw().len(),
                actual: top.image.as_raw().len(),
            });
        }
        for (dst, src) in self.image.pixels_mut().zip(top.image.pixels()) {
            if src[3] != 0 {
                *dst = *src;
            }
        }
        Ok(())
    }
}

fn ensure_non_empty(width: u32, height: u32) -> Result<(), RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::ZeroSized { width, height });
    }
    Ok(())
}
