use super::*;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn wide_image_on_landscape_surface_crops_sides() {
    let r = cover_rect(Size::new(800.0, 600.0), Size::new(1600.0, 900.0)).unwrap();
    assert!(approx(r.draw_height, 600.0));
    assert!(approx(r.draw_width, 1066.666_666_666_666_7));
    assert!(approx(r.offset_x, -133.333_333_333_333_3));
    assert_eq!(r.offset_y, 0.0);
}

#[test]
fn tall_image_on_wide_surface_crops_top_and_bottom() {
    let r = cover_rect(Size::new(1920.0, 1080.0), Size::new(1000.0, 1000.0)).unwrap();
    assert_eq!(r.draw_width, 1920.0);
    assert_eq!(r.draw_height, 1920.0);
    assert_eq!(r.offset_x, 0.0);
    assert!(approx(r.offset_y, -420.0));
}

#[test]
fn matching_aspect_ratio_fills_exactly() {
    let r = cover_rect(Size::new(400.0, 300.0), Size::new(800.0, 600.0)).unwrap();
    assert!(approx(r.draw_width, 400.0));
    assert!(approx(r.draw_height, 300.0));
    assert!(approx(r.offset_x, 0.0));
    assert!(approx(r.offset_y, 0.0));
}

#[test]
fn cover_never_letterboxes_and_crops_one_axis() {
    let sizes = [
        (1.0, 1.0),
        (3.0, 7.0),
        (800.0, 600.0),
        (600.0, 800.0),
        (1920.0, 1080.0),
        (333.0, 1000.0),
        (1600.0, 900.0),
        (1.5, 1000.0),
    ];
    for &(sw, sh) in &sizes {
        for &(iw, ih) in &sizes {
            let surface = Size::new(sw, sh);
            let r = cover_rect(surface, Size::new(iw, ih)).unwrap();
            assert!(r.draw_width >= sw - EPS, "{sw}x{sh} <- {iw}x{ih}: {r:?}");
            assert!(r.draw_height >= sh - EPS, "{sw}x{sh} <- {iw}x{ih}: {r:?}");
            assert!(
                r.offset_x == 0.0 || r.offset_y == 0.0,
                "at most one axis offset: {r:?}"
            );
            // Centered on the cropped axis.
            assert!(approx(r.offset_x * 2.0 + r.draw_width, sw));
            assert!(approx(r.offset_y * 2.0 + r.draw_height, sh));
            // Aspect ratio preserved.
            assert!(approx(r.draw_width / r.draw_height, iw / ih));
        }
    }
}

#[test]
fn degenerate_sizes_draw_nothing() {
    assert!(cover_rect(Size::new(0.0, 600.0), Size::new(10.0, 10.0)).is_none());
    assert!(cover_rect(Size::new(800.0, 600.0), Size::new(10.0, 0.0)).is_none());
    assert!(cover_rect(Size::new(f64::NAN, 600.0), Size::new(10.0, 10.0)).is_none());
    assert!(cover_rect(Size::new(800.0, 600.0), Size::new(f64::INFINITY, 10.0)).is_none());
}

#[test]
fn rect_and_image_transform_agree() {
    let image = Size::new(1600.0, 900.0);
    let r = cover_rect(Size::new(800.0, 600.0), image).unwrap();
    let tr = r.image_transform(image);
    let tl = tr * kurbo::Point::new(0.0, 0.0);
    let br = tr * kurbo::Point::new(image.width, image.height);
    let rect = r.rect();
    assert!(approx(tl.x, rect.x0) && approx(tl.y, rect.y0));
    assert!(approx(br.x, rect.x1) && approx(br.y, rect.y1));
}
