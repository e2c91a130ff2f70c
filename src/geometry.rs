//! Geometry primitives and angle conversions
//!
//! The coordinate system has its origin at the top-left corner:
//! - Positive X extends to the right
//! - Positive Y extends downward

/// A 2D point in pixel space
///
/// # Examples
///
/// ```
/// use softraster::Point;
///
/// let p = Point::new(10, 20);
/// assert_eq!(p.x, 10);
/// assert_eq!(Point::ZERO, Point::new(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
  /// X coordinate (horizontal position, increases to the right)
  pub x: i32,
  /// Y coordinate (vertical position, increases downward)
  pub y: i32,
}

impl Point {
  /// The origin (0, 0)
  pub const ZERO: Self = Self { x: 0, y: 0 };

  /// Creates a new point at the given coordinates
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }
}

/// Converts degrees to radians
pub fn deg_to_rad(degrees: f64) -> f64 {
  degrees * (std::f64::consts::PI / 180.0)
}

/// Converts radians to degrees
pub fn rad_to_deg(radians: f64) -> f64 {
  radians * (180.0 / std::f64::consts::PI)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn degree_radian_conversions_invert() {
    assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
    assert!((rad_to_deg(std::f64::consts::PI) - 180.0).abs() < 1e-12);
    for deg in [-720.0, -90.0, 0.0, 45.0, 360.5] {
      assert!((rad_to_deg(deg_to_rad(deg)) - deg).abs() < 1e-9);
    }
  }
}
