use thiserror::Error;

/// Startup-time configuration failures. All of these abort the run before the
/// first tick; the pipeline itself has no runtime failure modes.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("viewport size must be positive, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("grid counts must not be negative, got {cols} columns x {rows} rows")]
    InvalidGrid { cols: i32, rows: i32 },

    #[error("smoothing factor must be in (0, 1], got {0}")]
    InvalidFactor(f64),

    #[error("step bounds must satisfy 0 <= min <= max, got min {min} max {max}")]
    InvalidStepBounds { min: f64, max: f64 },

    #[error("monitor index {index} is out of range, {available} monitor(s) available")]
    MonitorOutOfRange { index: usize, available: usize },

    #[error("monitor detection is unavailable on this platform, pass --geometry instead")]
    MonitorDetectionUnavailable,

    #[error("stored config schemaVersion {found} is newer than supported {supported}")]
    UnsupportedSchema { found: u8, supported: u8 },

    #[error("config store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config store parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
