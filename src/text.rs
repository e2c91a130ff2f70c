//! Text stamping
//!
//! The canvas does not know how to turn characters into coverage; that is
//! delegated to a [`GlyphRasterizer`]. [`Canvas::text`] allocates a
//! temporary strip canvas sized to the string's pixel footprint, has the
//! rasterizer draw into it with additive blending (so overlapping glyph
//! strokes accumulate instead of punching holes), then stamps the strip
//! onto the destination through the ordinary [`Canvas::put_canvas`]
//! primitive at 1:1 scale. There is no text scaling.
//!
//! [`TtfFace`] is the bundled rasterizer, backed by `fontdue` with a fixed
//! per-glyph advance.

use crate::canvas::Canvas;
use crate::color::{BlendMode, Rgba};
use crate::error::{Error, Result};

/// Rasterizes strings into per-pixel coverage on a target canvas
///
/// The canvas only needs the glyph footprint (`glyph_width`,
/// `line_height`) to size the temporary strip, and `draw_string` to fill
/// it. Implementations write through [`Canvas::set_pixel`] so the strip's
/// additive blending applies.
pub trait GlyphRasterizer {
  /// Horizontal advance of one glyph, in pixels
  fn glyph_width(&self) -> i32;

  /// Height of one text line, in pixels
  fn line_height(&self) -> i32;

  /// Draws `text` onto `target` with its top-left corner at `(x, y)`
  fn draw_string(&self, target: &mut Canvas, text: &str, x: i32, y: i32, color: Rgba);
}

impl Canvas {
  /// Stamps `text` with its top-left corner at `(x, y)`
  ///
  /// The glyph strip is composited through [`Canvas::put_canvas`], so the
  /// destination blend mode applies to the stamped pixels.
  pub fn text(&mut self, text: &str, x: i32, y: i32, face: &impl GlyphRasterizer, color: Rgba) {
    let columns = text.chars().count() as i32;
    let mut strip = Canvas::new(
      columns * face.glyph_width(),
      face.line_height(),
      BlendMode::Add,
    );
    face.draw_string(&mut strip, text, 0, 0, color);

    let (w, h) = (strip.width(), strip.height());
    self.put_canvas(x, y, w, h, &strip);
  }
}

/// A monospace-advance glyph rasterizer over a TrueType/OpenType font
///
/// Glyph coverage comes from `fontdue`; the advance is fixed to the 'M'
/// advance at the requested pixel size, so every string's footprint is
/// simply `chars * glyph_width x line_height`.
#[derive(Debug)]
pub struct TtfFace {
  font: fontdue::Font,
  px: f32,
  glyph_width: i32,
  line_height: i32,
  baseline: i32,
}

impl TtfFace {
  /// Parses font data and derives fixed metrics at `px` pixels
  ///
  /// # Errors
  ///
  /// Returns [`Error::Font`] when the data cannot be parsed or the font
  /// carries no horizontal line metrics.
  pub fn from_bytes(data: &[u8], px: f32) -> Result<Self> {
    let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
      .map_err(|e| Error::Font(e.to_string()))?;
    let line = font
      .horizontal_line_metrics(px)
      .ok_or_else(|| Error::Font("font has no horizontal line metrics".to_string()))?;

    let glyph_width = font.metrics('M', px).advance_width.ceil() as i32;
    Ok(Self {
      font,
      px,
      glyph_width: glyph_width.max(1),
      line_height: (line.new_line_size.ceil() as i32).max(1),
      baseline: line.ascent.ceil() as i32,
    })
  }
}

impl GlyphRasterizer for TtfFace {
  fn glyph_width(&self) -> i32 {
    self.glyph_width
  }

  fn line_height(&self) -> i32 {
    self.line_height
  }

  fn draw_string(&self, target: &mut Canvas, text: &str, x: i32, y: i32, color: Rgba) {
    let baseline = y + self.baseline;
    let mut pen_x = x;

    for ch in text.chars() {
      let (metrics, coverage) = self.font.rasterize(ch, self.px);
      let top = baseline - (metrics.height as i32 + metrics.ymin);

      for row in 0..metrics.height {
        for col in 0..metrics.width {
          let cov = coverage[row * metrics.width + col];
          if cov == 0 {
            continue;
          }
          // Coverage modulates the channels and rides along as the blend
          // weight; full coverage overwrites, partial coverage accumulates.
          let shaded = Rgba::new(
            ((u16::from(color.r) * u16::from(cov)) / 255) as u8,
            ((u16::from(color.g) * u16::from(cov)) / 255) as u8,
            ((u16::from(color.b) * u16::from(cov)) / 255) as u8,
            cov,
          );
          target.set_pixel(pen_x + metrics.xmin + col as i32, top + row as i32, shaded);
        }
      }
      pen_x += self.glyph_width;
    }
  }
}
