use crate::domain::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// A position in viewport-relative space. Fractional while the pipeline is
/// converging; truncated to whole pixels only at the emission boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The pixel rectangle all pipeline coordinates are expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Result<Self, ConfigError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self {
            origin_x,
            origin_y,
            width,
            height,
        })
    }

    /// A viewport anchored at the origin, for pipelines that work in
    /// monitor-relative coordinates.
    pub fn relative(width: f64, height: f64) -> Result<Self, ConfigError> {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin_x + self.width / 2.0,
            self.origin_y + self.height / 2.0,
        )
    }
}

/// Row/column counts for grid snapping. Snapping is active only when both
/// counts are positive; zero on either axis turns it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    cols: i32,
    rows: i32,
}

impl GridSpec {
    pub fn new(cols: i32, rows: i32) -> Result<Self, ConfigError> {
        if cols < 0 || rows < 0 {
            return Err(ConfigError::InvalidGrid { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    pub fn disabled() -> Self {
        Self { cols: 0, rows: 0 }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn is_active(&self) -> bool {
        self.cols > 0 && self.rows > 0
    }
}

/// Which grid cell the snapper is currently locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

/// Step-limiter tuning. `factor` is the proportional gain, `min_step` and
/// `max_step` bound the per-tick step magnitude in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmootherParams {
    pub factor: f64,
    pub min_step: f64,
    pub max_step: f64,
}

impl SmootherParams {
    pub fn new(factor: f64, min_step: f64, max_step: f64) -> Result<Self, ConfigError> {
        if !(factor > 0.0) || factor > 1.0 {
            return Err(ConfigError::InvalidFactor(factor));
        }
        if !(min_step >= 0.0) || max_step < min_step {
            return Err(ConfigError::InvalidStepBounds {
                min: min_step,
                max: max_step,
            });
        }
        Ok(Self {
            factor,
            min_step,
            max_step,
        })
    }
}

impl Default for SmootherParams {
    fn default() -> Self {
        Self {
            factor: 0.01,
            min_step: 2.0,
            max_step: 75.0,
        }
    }
}

/// A monitor rectangle as reported by the OS, in global pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monitor {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Hotkey actions understood by the remote zoom control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomAction {
    ToggleZoom,
    ZoomIn,
    ZoomOut,
}
