//! Lossless PNG export
//!
//! The canvas delegates entropy coding to the `image` crate; the only
//! error a drawing session can ever surface is the one coming back from
//! here, and it is propagated with its source intact (a broken output
//! sink shows up as the encoder's I/O failure).

use crate::canvas::Canvas;
use crate::error::Result;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::io::Write;

/// Encodes the canvas as PNG straight into `writer`
///
/// # Errors
///
/// Returns [`crate::Error::Encode`] when encoding fails or the writer
/// refuses the bytes.
pub fn write_png<W: Write>(canvas: &Canvas, writer: W) -> Result<()> {
  PngEncoder::new(writer).write_image(
    canvas.pixels(),
    canvas.width() as u32,
    canvas.height() as u32,
    ExtendedColorType::Rgba8,
  )?;
  Ok(())
}

/// Encodes the canvas as PNG into an in-memory byte vector
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
  let mut out = Vec::new();
  write_png(canvas, &mut out)?;
  Ok(out)
}

impl Canvas {
  /// Convenience method form of [`write_png`]
  pub fn write_png<W: Write>(&self, writer: W) -> Result<()> {
    write_png(self, writer)
  }
}
