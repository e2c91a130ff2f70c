//! Shape rasterizers
//!
//! Lines, rectangles, circles, triangles and paths, each expressed as a
//! set of [`Canvas::set_pixel`] writes. There is exactly one line
//! implementation in the crate; rectangle outlines, triangle outlines and
//! paths all route through it. Nothing here anti-aliases, and nothing here
//! can fail: geometry that falls outside the canvas is clipped per pixel.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::geometry::Point;

impl Canvas {
  /// Draws a line from `(x0, y0)` to `(x1, y1)` with Bresenham stepping
  ///
  /// The loop ends at the endpoint, or early once the current point has
  /// left the canvas in its direction of travel on either axis (Bresenham
  /// steps monotonically, so such a point can never come back). Pixels are
  /// still clipped individually, so partially visible lines draw their
  /// visible part.
  pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    // The decision variable is kept in i64: endpoint deltas can span the
    // full i32 range and must not trip overflow checks mid-walk.
    let dx = (i64::from(x1) - i64::from(x0)).abs();
    let dy = (i64::from(y1) - i64::from(y0)).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (x0, y0);

    loop {
      self.set_pixel(x, y, color);
      if x == x1 && y == y1 {
        return;
      }
      let e2 = 2 * err;
      if e2 > -dy {
        err -= dy;
        x += sx;
        if (sx > 0 && x >= self.width) || (sx < 0 && x < 0) {
          return;
        }
      }
      if e2 < dx {
        err += dx;
        y += sy;
        if (sy > 0 && y >= self.height) || (sy < 0 && y < 0) {
          return;
        }
      }
    }
  }

  /// Draws a rectangle outline with corners `(x1, y1)` and `(x2, y2)`
  pub fn rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba) {
    self.line(x1, y1, x2, y1, color); // top
    self.line(x2, y1, x2, y2, color); // right
    self.line(x1, y2, x2, y2, color); // bottom
    self.line(x1, y1, x1, y2, color); // left
  }

  /// Fills the rectangle `[x1, x2] x [y1, y2]`, both ends inclusive
  ///
  /// Reversed bounds (`x1 > x2` or `y1 > y2`) yield an empty range, not an
  /// error.
  pub fn rect_filled(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba) {
    for x in x1..=x2 {
      for y in y1..=y2 {
        self.set_pixel(x, y, color);
      }
    }
  }

  /// Draws a circle outline with the midpoint algorithm
  ///
  /// Known limitation: if the circle's horizontal extent leaves
  /// `[0, width)` the whole call returns without drawing a partial
  /// circle.
  pub fn circle(&mut self, cx: i32, cy: i32, r: i32, color: Rgba) {
    let (mut x, mut y, mut dx, mut dy) = (r - 1, 0, 1, 1);
    let mut err = dx - (r * 2);

    while x >= y {
      if cx + x >= self.width || cx - x < 0 {
        return;
      }
      self.set_pixel(cx + x, cy + y, color);
      self.set_pixel(cx + y, cy + x, color);
      self.set_pixel(cx - y, cy + x, color);
      self.set_pixel(cx - x, cy + y, color);
      self.set_pixel(cx - x, cy - y, color);
      self.set_pixel(cx - y, cy - x, color);
      self.set_pixel(cx + y, cy - x, color);
      self.set_pixel(cx + x, cy - y, color);

      if err <= 0 {
        y += 1;
        err += dy;
        dy += 2;
      }
      if err > 0 {
        x -= 1;
        dx += 2;
        err += dx - (r * 2);
      }
    }
  }

  /// Fills a circle of radius `r` centered on `(cx, cy)`
  ///
  /// Each column fills the span `floor(sqrt(r^2 - x^2))` pixels above and
  /// below the center; the outermost columns at the poles are trimmed by
  /// one pixel to avoid a plus-sign artifact.
  pub fn circle_filled(&mut self, cx: i32, cy: i32, r: i32, color: Rgba) {
    let float_r = f64::from(r);

    for x in -r..=r {
      let float_x = f64::from(x);
      let height = (float_r * float_r - float_x * float_x).sqrt() as i32;

      let (top, bottom) = if height != r {
        (-height, height)
      } else {
        (-height + 1, height - 1)
      };
      for y in top..bottom {
        self.set_pixel(x + cx, y + cy, color);
      }
    }
  }

  /// Fills a circle then draws its outline; the outline wins on overlap
  pub fn circle_outline(&mut self, cx: i32, cy: i32, r: i32, inside: Rgba, outline: Rgba) {
    self.circle_filled(cx, cy, r, inside);
    self.circle(cx, cy, r, outline);
  }

  /// Draws a triangle outline, connecting the vertices in cyclic order
  pub fn triangle(&mut self, v1: Point, v2: Point, v3: Point, color: Rgba) {
    self.line(v1.x, v1.y, v2.x, v2.y, color);
    self.line(v2.x, v2.y, v3.x, v3.y, color);
    self.line(v3.x, v3.y, v1.x, v1.y, color);
  }

  /// Fills a triangle with a top/bottom split scanline sweep
  ///
  /// Vertices are sorted by y with three conditional swaps, then each half
  /// interpolates its left/right bounds with truncating integer division
  /// along the half's two edges. The truncation can shift a span edge by
  /// up to one pixel per row; that approximation is part of the contract.
  pub fn triangle_filled(&mut self, v1: Point, v2: Point, v3: Point, color: Rgba) {
    let (mut v1, mut v2, mut v3) = (v1, v2, v3);
    if v1.y > v2.y {
      std::mem::swap(&mut v1, &mut v2);
    }
    if v1.y > v3.y {
      std::mem::swap(&mut v1, &mut v3);
    }
    if v2.y > v3.y {
      std::mem::swap(&mut v2, &mut v3);
    }

    // Flat-bottom half: edges (v1,v2) and (v1,v3), anchored at v1.
    if v1.y != v2.y {
      for y in v1.y..=v2.y {
        let s1 = edge_x(v1, v2, y);
        let s2 = edge_x(v1, v3, y);
        self.fill_span(y, s1, s2, color);
      }
    }

    // Flat-top half: edges (v3,v2) and (v3,v1), anchored at v3.
    if v2.y != v3.y {
      for y in v2.y..=v3.y {
        let s1 = edge_x(v3, v2, y);
        let s2 = edge_x(v3, v1, y);
        self.fill_span(y, s1, s2, color);
      }
    }
  }

  /// Fills a triangle then draws its outline; the outline wins on overlap
  pub fn triangle_outline(&mut self, v1: Point, v2: Point, v3: Point, inside: Rgba, outline: Rgba) {
    self.triangle_filled(v1, v2, v3, inside);
    self.triangle(v1, v2, v3, outline);
  }

  /// Draws a line between each consecutive pair of points
  ///
  /// Fewer than two points is a no-op. The path is not closed
  /// automatically; repeat the first point to close a loop.
  pub fn draw_path(&mut self, path: &[Point], color: Rgba) {
    for pair in path.windows(2) {
      self.line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, color);
    }
  }

  // Scanline span fill with its own bounds clamping; the triangle
  // rasterizer does not lean on set_pixel's clipping.
  fn fill_span(&mut self, y: i32, s1: i32, s2: i32, color: Rgba) {
    if y < 0 || y >= self.height {
      return;
    }
    let (start, end) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
    for x in start.max(0)..=end.min(self.width - 1) {
      self.set_pixel(x, y, color);
    }
  }
}

/// Interpolates the x-bound of edge `(a, b)` at scanline `y`, anchored at
/// `a`, with truncating division
///
/// Computed in i64 so the delta product cannot overflow for far-flung
/// vertices; the result lies between `a.x` and `b.x` and fits back in i32.
/// Callers guarantee `a.y != b.y`.
fn edge_x(a: Point, b: Point, y: i32) -> i32 {
  let run = i64::from(b.x) - i64::from(a.x);
  let rise = i64::from(b.y) - i64::from(a.y);
  (i64::from(a.x) + run * (i64::from(y) - i64::from(a.y)) / rise) as i32
}
