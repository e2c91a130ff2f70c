//! Canvas-onto-canvas compositing and point rotation tests

use softraster::{BlendMode, Canvas, Rgba};

fn checker_2x2() -> Canvas {
  let mut source = Canvas::new(2, 2, BlendMode::None);
  source.set_pixel(0, 0, Rgba::RED);
  source.set_pixel(1, 0, Rgba::GREEN);
  source.set_pixel(0, 1, Rgba::BLUE);
  source.set_pixel(1, 1, Rgba::WHITE);
  source
}

#[test]
fn upscaling_replicates_source_pixels_as_blocks() {
  let source = checker_2x2();
  let mut dest = Canvas::new(4, 4, BlendMode::None);
  dest.put_canvas(0, 0, 4, 4, &source);

  for ox in 0..4 {
    for oy in 0..4 {
      let expected = source.pixel_at(ox / 2, oy / 2);
      assert_eq!(
        dest.pixel_at(ox, oy),
        expected,
        "nearest-neighbor block at ({ox}, {oy})"
      );
    }
  }
}

#[test]
fn one_to_one_blit_copies_at_the_given_offset() {
  let source = checker_2x2();
  let mut dest = Canvas::new(6, 6, BlendMode::None);
  dest.put_canvas(3, 2, 2, 2, &source);

  assert_eq!(dest.pixel_at(3, 2), Rgba::RED);
  assert_eq!(dest.pixel_at(4, 2), Rgba::GREEN);
  assert_eq!(dest.pixel_at(3, 3), Rgba::BLUE);
  assert_eq!(dest.pixel_at(4, 3), Rgba::WHITE);
  assert_eq!(dest.pixel_at(2, 2), Rgba::TRANSPARENT, "left of the blit");
  assert_eq!(dest.pixel_at(5, 2), Rgba::TRANSPARENT, "right of the blit");
}

#[test]
fn downscaling_samples_nearest_source_pixels() {
  let mut source = Canvas::new(4, 4, BlendMode::None);
  source.fill(Rgba::RED);
  source.set_pixel(0, 0, Rgba::WHITE);
  source.set_pixel(2, 2, Rgba::GREEN);

  let mut dest = Canvas::new(2, 2, BlendMode::None);
  dest.put_canvas(0, 0, 2, 2, &source);

  // Destination (ox, oy) samples source (ox * 2, oy * 2).
  assert_eq!(dest.pixel_at(0, 0), Rgba::WHITE);
  assert_eq!(dest.pixel_at(1, 1), Rgba::GREEN);
  assert_eq!(dest.pixel_at(1, 0), Rgba::RED);
}

#[test]
fn zero_size_blits_are_a_no_op() {
  let source = checker_2x2();
  let empty = Canvas::new(0, 0, BlendMode::None);

  let mut dest = Canvas::new(4, 4, BlendMode::None);
  dest.put_canvas(0, 0, 0, 4, &source);
  dest.put_canvas(0, 0, 4, 0, &source);
  dest.put_canvas(0, 0, 4, 4, &empty);

  for x in 0..4 {
    for y in 0..4 {
      assert_eq!(dest.pixel_at(x, y), Rgba::TRANSPARENT);
    }
  }

  let mut empty_dest = Canvas::new(0, 0, BlendMode::None);
  empty_dest.put_canvas(0, 0, 2, 2, &source); // must not panic
}

#[test]
fn compositing_leaves_the_source_unchanged() {
  let source = checker_2x2();
  let before = source.pixels().to_vec();

  let mut dest = Canvas::new(8, 8, BlendMode::None);
  dest.put_canvas(1, 1, 6, 6, &source);

  assert_eq!(source.pixels(), before.as_slice());
}

#[test]
fn destination_blend_mode_applies_to_composited_pixels() {
  // Partial-alpha source pixels only exist through buffer adoption; drawn
  // pixels always store alpha 255 and would overwrite.
  let source = Canvas::from_raw(vec![10, 20, 30, 128], 1, 1, BlendMode::None).expect("adopt");

  let mut dest = Canvas::from_raw(vec![5, 5, 5, 255], 1, 1, BlendMode::Add).expect("adopt");
  dest.put_canvas(0, 0, 1, 1, &source);
  assert_eq!(dest.pixel_at(0, 0), Rgba::new(15, 25, 35, 255));
}

#[test]
fn partially_clipped_blit_draws_the_visible_part() {
  let source = checker_2x2();
  let mut dest = Canvas::new(4, 4, BlendMode::None);
  dest.put_canvas(3, 3, 2, 2, &source);

  assert_eq!(dest.pixel_at(3, 3), Rgba::RED);
  assert_eq!(dest.pixel_at(2, 3), Rgba::TRANSPARENT);
}

#[test]
fn rotate_by_zero_returns_the_input_point() {
  let canvas = Canvas::new(10, 10, BlendMode::None);
  assert_eq!(canvas.rotate_point(7.25, 5.5, 0.0), (7, 5));
  assert_eq!(canvas.rotate_point(2.5, 8.75, 0.0), (2, 8));
}

#[test]
fn rotate_by_full_turn_matches_zero() {
  let canvas = Canvas::new(10, 10, BlendMode::None);
  for (x, y) in [(7.25, 5.5), (2.5, 8.75), (5.5, 5.5)] {
    assert_eq!(
      canvas.rotate_point(x, y, 360.0),
      canvas.rotate_point(x, y, 0.0),
      "point ({x}, {y})"
    );
  }
}

#[test]
fn rotate_quarter_turn_about_the_center() {
  let canvas = Canvas::new(10, 10, BlendMode::None);
  // (8, 5) is 3 pixels right of the center (5, 5); a 90-degree turn in the
  // y-down coordinate system lands 3 pixels below it.
  assert_eq!(canvas.rotate_point(8.0, 5.0, 90.0), (5, 8));
  assert_eq!(canvas.rotate_point(8.0, 5.0, 180.0), (2, 5));
}

#[test]
fn rotation_ignores_canvas_bounds() {
  let canvas = Canvas::new(4, 4, BlendMode::None);
  let (x, y) = canvas.rotate_point(40.0, 2.0, 180.0);
  assert!(x < 0, "result may leave the canvas, got ({x}, {y})");
}
