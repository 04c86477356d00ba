use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::cli::Cli;
use crate::domain::errors::ConfigError;
use crate::domain::models::{GridSpec, Monitor, SmootherParams};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The persisted slice of a run's arguments, written back after resolution
/// so the next invocation can reuse them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredConfig {
    pub schema_version: u8,
    pub saved_at: Option<DateTime<Utc>>,
    pub ip: String,
    pub port: u16,
    pub delay_ms: u64,
    pub rows: i32,
    pub columns: i32,
    pub monitor: usize,
    pub padding: f64,
    pub factor: f64,
    pub min_step: f64,
    pub max_step: f64,
    pub zoom: f64,
    pub keyfile: Option<String>,
}

impl Default for StoredConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: None,
            ip: "localhost".to_string(),
            port: 12345,
            delay_ms: 10,
            rows: 0,
            columns: 0,
            monitor: 0,
            padding: 0.45,
            factor: 0.01,
            min_step: 2.0,
            max_step: 75.0,
            zoom: 2.0,
            keyfile: None,
        }
    }
}

impl StoredConfig {
    /// Equality over the persisted values, ignoring bookkeeping fields.
    pub fn same_values(&self, other: &StoredConfig) -> bool {
        let a = StoredConfig {
            schema_version: 0,
            saved_at: None,
            ..self.clone()
        };
        let b = StoredConfig {
            schema_version: 0,
            saved_at: None,
            ..other.clone()
        };
        a == b
    }
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cursorlens"))
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("last_config.json"))
}

/// Load the stored config, tolerating older schemas by filling defaults and
/// rejecting newer ones. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<StoredConfig, ConfigError> {
    if !path.exists() {
        return Ok(StoredConfig::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;

    let schema_version = value
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u8;
    if schema_version > CURRENT_SCHEMA_VERSION {
        return Err(ConfigError::UnsupportedSchema {
            found: schema_version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    let mut stored: StoredConfig = serde_json::from_value(value)?;
    stored.schema_version = CURRENT_SCHEMA_VERSION;
    Ok(stored)
}

pub fn save(path: &Path, stored: &StoredConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(stored)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Persist the resolved settings when they differ from what was loaded.
/// Returns whether a write happened.
pub fn save_if_changed(
    path: &Path,
    previous: &StoredConfig,
    mut next: StoredConfig,
) -> Result<bool, ConfigError> {
    if next.same_values(previous) {
        return Ok(false);
    }
    next.schema_version = CURRENT_SCHEMA_VERSION;
    next.saved_at = Some(Utc::now());
    save(path, &next)?;
    Ok(true)
}

/// Fully resolved, validated run settings: CLI arguments win, then the
/// stored config, then the built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub ip: String,
    pub port: u16,
    pub delay: Duration,
    pub grid: GridSpec,
    pub monitor_index: usize,
    pub geometry: Option<Monitor>,
    pub padding: f64,
    pub smoother: SmootherParams,
    pub zoom: f64,
    pub keyfile: Option<PathBuf>,
    pub zoom_in: bool,
    pub zoom_toggle: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, stored: &StoredConfig) -> Result<Self, ConfigError> {
        let mut delay_ms = cli.delay.unwrap_or(stored.delay_ms as i64);
        if delay_ms < 0 {
            warn!("delay cannot be below 0, using 0");
            delay_ms = 0;
        }

        let grid = GridSpec::new(
            cli.columns.unwrap_or(stored.columns),
            cli.rows.unwrap_or(stored.rows),
        )?;
        let smoother = SmootherParams::new(
            cli.factor.unwrap_or(stored.factor),
            cli.min_step.unwrap_or(stored.min_step),
            cli.max_step.unwrap_or(stored.max_step),
        )?;

        let geometry = cli.geometry.as_ref().map(|g| Monitor {
            width: g[0],
            height: g[1],
            x: g[2],
            y: g[3],
        });

        let keyfile = cli
            .keyfile
            .clone()
            .or_else(|| stored.keyfile.clone())
            .map(resolve_keyfile_path);

        Ok(Self {
            ip: cli.ip.clone().unwrap_or_else(|| stored.ip.clone()),
            port: cli.port.unwrap_or(stored.port),
            delay: Duration::from_millis(delay_ms as u64),
            grid,
            monitor_index: cli.monitor.unwrap_or(stored.monitor),
            geometry,
            padding: cli.padding.unwrap_or(stored.padding),
            smoother,
            zoom: cli.zoom.unwrap_or(stored.zoom),
            keyfile,
            zoom_in: cli.zoom_in,
            zoom_toggle: cli.zoom_toggle,
        })
    }

    pub fn to_stored(&self) -> StoredConfig {
        StoredConfig {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: None,
            ip: self.ip.clone(),
            port: self.port,
            delay_ms: self.delay.as_millis() as u64,
            rows: self.grid.rows(),
            columns: self.grid.cols(),
            monitor: self.monitor_index,
            padding: self.padding,
            factor: self.smoother.factor,
            min_step: self.smoother.min_step,
            max_step: self.smoother.max_step,
            zoom: self.zoom,
            keyfile: self.keyfile.as_ref().map(|p| p.display().to_string()),
        }
    }
}

// Relative key file paths live under the config directory, like the rest of
// the persisted state.
fn resolve_keyfile_path(raw: String) -> PathBuf {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
