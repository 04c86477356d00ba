use crate::domain::models::{Point, Viewport};

/// Keep `point` far enough from the viewport edges that a crop of
/// `width/zoom x height/zoom` centered on it never samples outside the
/// monitor. A negative zoom disables the clamp entirely; zero or non-finite
/// zoom is treated the same way so the function stays total.
pub fn clamp_to_visible(viewport: &Viewport, point: Point, zoom: f64) -> Point {
    if !(zoom > 0.0) {
        return point;
    }

    let half_w = viewport.width / (2.0 * zoom);
    let half_h = viewport.height / (2.0 * zoom);

    Point {
        x: clamp_axis(
            point.x,
            viewport.origin_x + half_w,
            viewport.origin_x + viewport.width - half_w,
        ),
        y: clamp_axis(
            point.y,
            viewport.origin_y + half_h,
            viewport.origin_y + viewport.height - half_h,
        ),
    }
}

// With zoom < 1 the half-extent exceeds half the viewport and the interval
// inverts; the point settles on the midpoint instead.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return (min + max) / 2.0;
    }
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::clamp_to_visible;
    use crate::domain::models::{Point, Viewport};

    fn viewport() -> Viewport {
        Viewport::relative(1920.0, 1080.0).unwrap()
    }

    #[test]
    fn negative_zoom_disables_clamping() {
        let point = Point::new(-500.0, 9999.0);
        let out = clamp_to_visible(&viewport(), point, -1.0);
        assert_eq!(out, point);
    }

    #[test]
    fn zoomed_crop_stays_inside_the_monitor() {
        let vp = viewport();
        let zoom = 2.0;
        for (x, y) in [(0.0, 0.0), (1920.0, 1080.0), (5.0, 1000.0), (960.0, 540.0)] {
            let out = clamp_to_visible(&vp, Point::new(x, y), zoom);
            let half_w = vp.width / (2.0 * zoom);
            let half_h = vp.height / (2.0 * zoom);
            assert!(out.x - half_w >= 0.0);
            assert!(out.x + half_w <= vp.width);
            assert!(out.y - half_h >= 0.0);
            assert!(out.y + half_h <= vp.height);
        }
    }

    #[test]
    fn interior_point_passes_through() {
        let out = clamp_to_visible(&viewport(), Point::new(960.0, 540.0), 2.0);
        assert_eq!(out, Point::new(960.0, 540.0));
    }

    #[test]
    fn zoom_of_one_pins_to_the_center() {
        let out = clamp_to_visible(&viewport(), Point::new(10.0, 10.0), 1.0);
        assert_eq!(out, Point::new(960.0, 540.0));
    }

    #[test]
    fn inverted_interval_degrades_to_midpoint() {
        // Zoomed out past the monitor: min > max on both axes.
        let out = clamp_to_visible(&viewport(), Point::new(100.0, 2000.0), 0.5);
        assert_eq!(out, Point::new(960.0, 540.0));
    }

    #[test]
    fn zero_zoom_is_a_no_op() {
        let point = Point::new(123.0, 456.0);
        assert_eq!(clamp_to_visible(&viewport(), point, 0.0), point);
    }

    #[test]
    fn honors_a_non_zero_origin() {
        let vp = Viewport::new(100.0, 200.0, 800.0, 600.0).unwrap();
        let out = clamp_to_visible(&vp, Point::new(0.0, 0.0), 2.0);
        assert_eq!(out, Point::new(300.0, 350.0));
    }
}
