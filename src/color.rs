//! Color and blending types
//!
//! A canvas stores straight (non-premultiplied) RGBA bytes, but it never
//! keeps partial transparency: every write forces the stored alpha to 255.
//! The alpha carried by an incoming [`Rgba`] is only a *blend weight* for
//! the [`BlendMode::Multiply`] arithmetic, never stored transparency.

/// An RGBA color with 8-bit channels
///
/// # Examples
///
/// ```
/// use softraster::Rgba;
///
/// let red = Rgba::rgb(255, 0, 0);
/// assert_eq!(red.a, 255);
/// assert_eq!(Rgba::TRANSPARENT, Rgba::new(0, 0, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
  /// Red component (0-255)
  pub r: u8,
  /// Green component (0-255)
  pub g: u8,
  /// Blue component (0-255)
  pub b: u8,
  /// Alpha component (0-255); a blend weight on write, see module docs
  pub a: u8,
}

impl Rgba {
  /// Fully transparent black
  pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
  /// Opaque black
  pub const BLACK: Self = Self::new(0, 0, 0, 255);
  /// Opaque white
  pub const WHITE: Self = Self::new(255, 255, 255, 255);
  /// Opaque red
  pub const RED: Self = Self::new(255, 0, 0, 255);
  /// Opaque green
  pub const GREEN: Self = Self::new(0, 255, 0, 255);
  /// Opaque blue
  pub const BLUE: Self = Self::new(0, 0, 255, 255);

  /// Creates a color from all four channels
  pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }

  /// Creates an opaque color
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 255 }
  }
}

/// How a newly written color combines with the pixel already stored
///
/// Fixed at canvas construction. `Add` and `Multiply` accumulate with
/// native unsigned-byte wraparound on overflow; there is no saturation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
  /// Add incoming channel values to the stored ones
  Add,
  /// Add incoming channels scaled by `alpha / 255` to the stored ones
  Multiply,
  /// Overwrite the stored channels
  None,
}
