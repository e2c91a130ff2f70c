//! Error types for softraster
//!
//! Rasterization itself never fails: out-of-range coordinates are clipped
//! silently and degenerate geometry draws nothing. The only fallible
//! surfaces are buffer adoption, font parsing, and image export, and those
//! are covered by the variants below.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use thiserror::Error;

/// Result type alias for softraster operations
///
/// # Examples
///
/// ```
/// use softraster::Result;
///
/// fn export() -> Result<()> {
///   Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for softraster
#[derive(Error, Debug)]
pub enum Error {
  /// An adopted pixel buffer did not match the declared dimensions
  #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
  BufferSize {
    /// `width * height * 4`
    expected: usize,
    /// Length of the buffer that was handed in
    actual: usize,
  },

  /// Font data could not be parsed or lacked required metrics
  #[error("font error: {0}")]
  Font(String),

  /// Image encoding failed (including writes to a broken output sink)
  #[error("encode error: {0}")]
  Encode(#[from] image::ImageError),

  /// I/O error outside the encoder itself
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}
