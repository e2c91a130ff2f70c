//! softraster: a software rasterizer over an in-memory RGBA pixel buffer
//!
//! Construct a [`Canvas`], issue draw calls that mutate it in place, then
//! composite it onto another canvas or export it as PNG. Everything is
//! synchronous and single-threaded; drawing never fails, it clips.
//!
//! ```
//! use softraster::{BlendMode, Canvas, Point, Rgba};
//!
//! let mut canvas = Canvas::new(128, 128, BlendMode::None);
//! canvas.fill(Rgba::BLACK);
//! canvas.circle_filled(64, 64, 30, Rgba::RED);
//! canvas.triangle(
//!   Point::new(10, 100),
//!   Point::new(60, 20),
//!   Point::new(110, 100),
//!   Rgba::WHITE,
//! );
//! let png = softraster::encode_png(&canvas).unwrap();
//! assert!(!png.is_empty());
//! ```

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod image_output;
mod raster;
pub mod text;

pub use canvas::Canvas;
pub use color::{BlendMode, Rgba};
pub use error::{Error, Result};
pub use geometry::{deg_to_rad, rad_to_deg, Point};
pub use image_output::{encode_png, write_png};
pub use text::{GlyphRasterizer, TtfFace};
