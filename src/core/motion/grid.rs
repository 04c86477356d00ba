use crate::domain::models::{Cell, GridSpec, Point, Viewport};

/// Map a raw point to the center of a grid cell, with hysteresis around the
/// currently locked cell.
///
/// The locked cell's rectangle is expanded by `padding * cell_size` on every
/// side; the raw point has to leave that sticky zone (bounds inclusive)
/// before the lock moves to a new cell. The returned target is always the
/// exact center of the locked cell, never an intermediate value — easing
/// toward it is the smoother's job.
///
/// With an inactive grid the raw point passes through untouched and the lock
/// is left as-is.
pub fn snap(
    raw: Point,
    viewport: &Viewport,
    grid: GridSpec,
    locked: Option<Cell>,
    padding: f64,
) -> (Option<Cell>, Point) {
    if !grid.is_active() {
        return (locked, raw);
    }

    let cell_w = viewport.width / grid.cols() as f64;
    let cell_h = viewport.height / grid.rows() as f64;

    let Some(cell) = locked else {
        let cell = cell_at(raw, cell_w, cell_h, grid);
        return (Some(cell), cell_center(cell, cell_w, cell_h));
    };

    let pad_x = cell_w * padding;
    let pad_y = cell_h * padding;
    let zone_left = cell.col as f64 * cell_w - pad_x;
    let zone_right = (cell.col + 1) as f64 * cell_w + pad_x;
    let zone_top = cell.row as f64 * cell_h - pad_y;
    let zone_bottom = (cell.row + 1) as f64 * cell_h + pad_y;

    let in_zone = raw.x >= zone_left && raw.x <= zone_right && raw.y >= zone_top && raw.y <= zone_bottom;
    if in_zone {
        return (Some(cell), cell_center(cell, cell_w, cell_h));
    }

    let cell = cell_at(raw, cell_w, cell_h, grid);
    (Some(cell), cell_center(cell, cell_w, cell_h))
}

fn cell_at(raw: Point, cell_w: f64, cell_h: f64, grid: GridSpec) -> Cell {
    Cell {
        col: ((raw.x / cell_w).floor() as i32).clamp(0, grid.cols() - 1),
        row: ((raw.y / cell_h).floor() as i32).clamp(0, grid.rows() - 1),
    }
}

fn cell_center(cell: Cell, cell_w: f64, cell_h: f64) -> Point {
    Point {
        x: (cell.col as f64 + 0.5) * cell_w,
        y: (cell.row as f64 + 0.5) * cell_h,
    }
}

#[cfg(test)]
mod tests {
    use super::snap;
    use crate::domain::models::{Cell, GridSpec, Point, Viewport};

    fn viewport() -> Viewport {
        Viewport::relative(1920.0, 1080.0).unwrap()
    }

    fn grid() -> GridSpec {
        GridSpec::new(3, 2).unwrap()
    }

    #[test]
    fn inactive_grid_passes_raw_through() {
        let raw = Point::new(123.4, 567.8);
        let locked = Some(Cell { col: 1, row: 1 });
        let (cell, target) = snap(raw, &viewport(), GridSpec::disabled(), locked, 0.45);
        assert_eq!(cell, locked);
        assert_eq!(target, raw);
    }

    #[test]
    fn first_evaluation_locks_the_containing_cell() {
        // 3x2 over 1920x1080: cells are 640x540, cell (0,0) centers at (320, 270).
        let (cell, target) = snap(Point::new(320.0, 270.0), &viewport(), grid(), None, 0.45);
        assert_eq!(cell, Some(Cell { col: 0, row: 0 }));
        assert_eq!(target, Point::new(320.0, 270.0));
    }

    #[test]
    fn first_evaluation_clamps_out_of_bounds_samples() {
        let (cell, target) = snap(Point::new(1920.0, 1080.0), &viewport(), grid(), None, 0.45);
        assert_eq!(cell, Some(Cell { col: 2, row: 1 }));
        assert_eq!(target, Point::new(1600.0, 810.0));
    }

    #[test]
    fn sticky_zone_holds_across_a_raw_cell_boundary() {
        let locked = Some(Cell { col: 0, row: 0 });
        // 700 crosses the 640 boundary but stays within 640 + 0.45*640 = 928.
        let (cell, target) = snap(Point::new(700.0, 270.0), &viewport(), grid(), locked, 0.45);
        assert_eq!(cell, locked);
        assert_eq!(target, Point::new(320.0, 270.0));
    }

    #[test]
    fn repeated_samples_inside_the_zone_never_move_the_target() {
        let mut locked = Some(Cell { col: 0, row: 0 });
        for x in [340.0, 600.0, 900.0, 928.0, 10.0] {
            let (cell, target) = snap(Point::new(x, 270.0), &viewport(), grid(), locked, 0.45);
            assert_eq!(cell, Some(Cell { col: 0, row: 0 }));
            assert_eq!(target, Point::new(320.0, 270.0));
            locked = cell;
        }
    }

    #[test]
    fn leaving_the_zone_relocks_from_the_raw_position() {
        let locked = Some(Cell { col: 0, row: 0 });
        let (cell, target) = snap(Point::new(1000.0, 270.0), &viewport(), grid(), locked, 0.45);
        assert_eq!(cell, Some(Cell { col: 1, row: 0 }));
        assert_eq!(target, Point::new(960.0, 270.0));
    }

    #[test]
    fn zone_bounds_are_inclusive() {
        let locked = Some(Cell { col: 0, row: 0 });
        let (cell, _) = snap(Point::new(928.0, 270.0), &viewport(), grid(), locked, 0.45);
        assert_eq!(cell, locked);
        let (cell, _) = snap(Point::new(928.1, 270.0), &viewport(), grid(), locked, 0.45);
        assert_eq!(cell, Some(Cell { col: 1, row: 0 }));
    }

    #[test]
    fn vertical_hysteresis_mirrors_horizontal() {
        let locked = Some(Cell { col: 0, row: 0 });
        // 540 + 0.45*540 = 783.
        let (cell, _) = snap(Point::new(320.0, 783.0), &viewport(), grid(), locked, 0.45);
        assert_eq!(cell, locked);
        let (cell, target) = snap(Point::new(320.0, 800.0), &viewport(), grid(), locked, 0.45);
        assert_eq!(cell, Some(Cell { col: 0, row: 1 }));
        assert_eq!(target, Point::new(320.0, 810.0));
    }

    #[test]
    fn zero_padding_releases_at_the_raw_boundary() {
        let locked = Some(Cell { col: 0, row: 0 });
        let (cell, _) = snap(Point::new(641.0, 270.0), &viewport(), grid(), locked, 0.0);
        assert_eq!(cell, Some(Cell { col: 1, row: 0 }));
    }
}
