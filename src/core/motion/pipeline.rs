use crate::core::motion::clamp::clamp_to_visible;
use crate::core::motion::grid::snap;
use crate::core::motion::smoothing::smooth_motion;
use crate::domain::models::{Cell, GridSpec, Point, SmootherParams, Viewport};

/// State the pipeline carries across ticks: the smoothed position and the
/// grid cell it is locked to. One writer, one reader — the pipeline itself.
#[derive(Debug, Clone, Copy)]
pub struct PipelineState {
    pub current: Point,
    pub locked_cell: Option<Cell>,
}

/// Composes grid snapping, zoom-aware clamping and step-limited smoothing
/// into a single per-tick `advance` call. All inputs are validated at
/// construction; from then on every advance is total and infallible.
#[derive(Debug)]
pub struct MotionPipeline {
    viewport: Viewport,
    grid: GridSpec,
    padding: f64,
    zoom: f64,
    params: SmootherParams,
    state: PipelineState,
}

impl MotionPipeline {
    pub fn new(
        viewport: Viewport,
        grid: GridSpec,
        padding: f64,
        zoom: f64,
        params: SmootherParams,
        initial: Point,
    ) -> Self {
        Self {
            viewport,
            grid,
            padding,
            zoom,
            params,
            state: PipelineState {
                current: initial,
                locked_cell: None,
            },
        }
    }

    /// One tick: snap the raw sample to the grid, clamp the target into the
    /// zoom-visible region, ease the current position toward it, and emit
    /// whole pixels. Internal state stays fractional between ticks.
    pub fn advance(&mut self, raw: Point) -> (i32, i32) {
        let (locked, target) = snap(raw, &self.viewport, self.grid, self.state.locked_cell, self.padding);
        self.state.locked_cell = locked;

        let target = clamp_to_visible(&self.viewport, target, self.zoom);

        self.state.current = smooth_motion(self.state.current, target, &self.params);

        (self.state.current.x as i32, self.state.current.y as i32)
    }

    pub fn current(&self) -> Point {
        self.state.current
    }

    pub fn locked_cell(&self) -> Option<Cell> {
        self.state.locked_cell
    }
}
