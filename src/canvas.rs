//! The canvas: an owned RGBA pixel buffer plus a blend mode
//!
//! A [`Canvas`] is a fixed-size, row-major RGBA byte buffer together with
//! the [`BlendMode`] that governs every pixel write. All drawing operations
//! mutate the canvas in place and return nothing; none of them can fail.
//! Out-of-range coordinates are clipped silently on write and read back as
//! transparent black — "clip, don't fail" is the API contract, not an
//! oversight.
//!
//! Shape rasterizers (lines, rectangles, circles, triangles, paths) live in
//! the `raster` module as further `impl Canvas` blocks; text stamping lives
//! in [`crate::text`] and PNG export in [`crate::image_output`].
//!
//! # Example
//!
//! ```
//! use softraster::{BlendMode, Canvas, Rgba};
//!
//! let mut canvas = Canvas::new(64, 64, BlendMode::None);
//! canvas.fill(Rgba::BLACK);
//! canvas.line(0, 0, 63, 63, Rgba::WHITE);
//! assert_eq!(canvas.pixel_at(0, 0), Rgba::WHITE);
//! ```

use crate::color::{BlendMode, Rgba};
use crate::error::{Error, Result};
use crate::geometry::deg_to_rad;

/// A mutable RGBA pixel buffer with a fixed size and blend mode
///
/// The buffer is `width * height * 4` bytes, row-major, stride
/// `width * 4`, with no inter-row padding. Stored alpha is always 255
/// after a write; see [`crate::color`] for the blending rules.
///
/// A canvas is exclusively owned: drawing takes `&mut self`, compositing
/// reads the source through `&Canvas`, and there is no interior
/// mutability. Serializing access across threads is the caller's job.
#[derive(Debug)]
pub struct Canvas {
  pub(crate) width: i32,
  pub(crate) height: i32,
  pub(crate) pixel_count: usize,
  pub(crate) blend: BlendMode,
  pub(crate) pixels: Vec<u8>,
}

impl Canvas {
  /// Creates a canvas of the given size with a zeroed pixel buffer
  ///
  /// Negative dimensions are treated as zero. A zero-size canvas is valid;
  /// every drawing operation on it is a silent no-op.
  pub fn new(width: i32, height: i32, blend: BlendMode) -> Self {
    let width = width.max(0);
    let height = height.max(0);
    let pixel_count = width as usize * height as usize;
    Self {
      width,
      height,
      pixel_count,
      blend,
      pixels: vec![0; pixel_count * 4],
    }
  }

  /// Adopts an existing RGBA buffer without copying
  ///
  /// The buffer must hold exactly `width * height * 4` bytes.
  ///
  /// # Errors
  ///
  /// Returns [`Error::BufferSize`] when the buffer length does not match
  /// the declared dimensions.
  pub fn from_raw(pixels: Vec<u8>, width: i32, height: i32, blend: BlendMode) -> Result<Self> {
    let width = width.max(0);
    let height = height.max(0);
    let pixel_count = width as usize * height as usize;
    let expected = pixel_count * 4;
    if pixels.len() != expected {
      return Err(Error::BufferSize {
        expected,
        actual: pixels.len(),
      });
    }
    Ok(Self {
      width,
      height,
      pixel_count,
      blend,
      pixels,
    })
  }

  /// Consumes the canvas and returns the pixel buffer
  pub fn into_raw(self) -> Vec<u8> {
    self.pixels
  }

  /// Canvas width in pixels
  pub fn width(&self) -> i32 {
    self.width
  }

  /// Canvas height in pixels
  pub fn height(&self) -> i32 {
    self.height
  }

  /// Cached `width * height`
  pub fn pixel_count(&self) -> usize {
    self.pixel_count
  }

  /// The blend mode fixed at construction
  pub fn blend_mode(&self) -> BlendMode {
    self.blend
  }

  /// The raw RGBA bytes, row-major, stride `width * 4`
  pub fn pixels(&self) -> &[u8] {
    &self.pixels
  }

  /// Whether `(x, y)` lies inside `[0, width) x [0, height)`
  pub fn is_point_in_canvas(&self, x: i32, y: i32) -> bool {
    x >= 0 && x < self.width && y >= 0 && y < self.height
  }

  #[inline]
  fn offset(&self, x: i32, y: i32) -> usize {
    (y as usize * self.width as usize + x as usize) * 4
  }

  /// Writes a color at `(x, y)` subject to the blend mode
  ///
  /// Out-of-bounds coordinates are a no-op. The stored alpha is forced to
  /// 255. An incoming alpha of 255 overwrites regardless of blend mode;
  /// otherwise `Multiply` accumulates alpha-scaled channels and `Add`
  /// accumulates the channels directly, both with wraparound on overflow.
  pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
    if !self.is_point_in_canvas(x, y) {
      return;
    }
    let i = self.offset(x, y);

    self.pixels[i + 3] = 255;
    if color.a == 255 || self.blend == BlendMode::None {
      self.pixels[i] = color.r;
      self.pixels[i + 1] = color.g;
      self.pixels[i + 2] = color.b;
    } else if self.blend == BlendMode::Multiply {
      let weight = f32::from(color.a) / 255.0;
      self.pixels[i] = self.pixels[i].wrapping_add((f32::from(color.r) * weight) as u8);
      self.pixels[i + 1] = self.pixels[i + 1].wrapping_add((f32::from(color.g) * weight) as u8);
      self.pixels[i + 2] = self.pixels[i + 2].wrapping_add((f32::from(color.b) * weight) as u8);
    } else {
      self.pixels[i] = self.pixels[i].wrapping_add(color.r);
      self.pixels[i + 1] = self.pixels[i + 1].wrapping_add(color.g);
      self.pixels[i + 2] = self.pixels[i + 2].wrapping_add(color.b);
    }
  }

  /// Returns the stored color at `(x, y)`
  ///
  /// Out-of-bounds coordinates read back as transparent black.
  pub fn pixel_at(&self, x: i32, y: i32) -> Rgba {
    if !self.is_point_in_canvas(x, y) {
      return Rgba::TRANSPARENT;
    }
    let i = self.offset(x, y);
    Rgba::new(
      self.pixels[i],
      self.pixels[i + 1],
      self.pixels[i + 2],
      self.pixels[i + 3],
    )
  }

  /// Fills the whole canvas with a color, honoring the blend mode
  pub fn fill(&mut self, color: Rgba) {
    for x in 0..self.width {
      for y in 0..self.height {
        self.set_pixel(x, y, color);
      }
    }
  }

  /// Draws `source` into the region `[x, x+w) x [y, y+h)`, scaling with
  /// nearest-neighbor sampling
  ///
  /// Every destination pixel is written through [`Canvas::set_pixel`], so
  /// the *destination's* blend mode applies to the composited pixels. The
  /// source is only read. A zero-size source, destination, or region is a
  /// no-op.
  pub fn put_canvas(&mut self, x: i32, y: i32, w: i32, h: i32, source: &Canvas) {
    if source.width == 0
      || source.height == 0
      || self.width == 0
      || self.height == 0
      || w == 0
      || h == 0
    {
      return;
    }

    let scale_x = f64::from(source.width) / f64::from(w);
    let scale_y = f64::from(source.height) / f64::from(h);

    for ox in 0..w {
      for oy in 0..h {
        let sx = (f64::from(ox) * scale_x) as i32;
        let sy = (f64::from(oy) * scale_y) as i32;
        self.set_pixel(ox + x, oy + y, source.pixel_at(sx, sy));
      }
    }
  }

  /// Rotates a point about the canvas center by `degrees`, counter-clockwise
  ///
  /// Pure with respect to the pixel buffer; the result is truncated to
  /// integer coordinates and is not bounds-checked.
  pub fn rotate_point(&self, x: f64, y: f64, degrees: f64) -> (i32, i32) {
    let half_width = f64::from(self.width) / 2.0;
    let half_height = f64::from(self.height) / 2.0;

    let dx = x - half_width;
    let dy = y - half_height;
    let mag = (dx * dx + dy * dy).sqrt();
    let dir = dy.atan2(dx) + deg_to_rad(degrees);
    (
      (dir.cos() * mag + half_width) as i32,
      (dir.sin() * mag + half_height) as i32,
    )
  }
}
