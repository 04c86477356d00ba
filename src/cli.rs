use clap::Parser;
use std::path::PathBuf;

/// Stream the mouse position to a remote zoom view over UDP. Most argument
/// values are persisted and reused on the next run.
#[derive(Parser, Debug)]
#[command(name = "cursorlens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Remote hostname or IP
    #[arg(short, long)]
    pub ip: Option<String>,

    /// UDP port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Inter-tick delay in milliseconds
    #[arg(short, long, allow_hyphen_values = true)]
    pub delay: Option<i64>,

    /// Divide the screen into N rows
    #[arg(short = 'R', long, allow_hyphen_values = true)]
    pub rows: Option<i32>,

    /// Divide the screen into N columns
    #[arg(short = 'C', long, allow_hyphen_values = true)]
    pub columns: Option<i32>,

    /// List available monitors and exit
    #[arg(short, long)]
    pub list_monitors: bool,

    /// Monitor index to track
    #[arg(short = 's', long)]
    pub monitor: Option<usize>,

    /// Explicit viewport geometry, skipping monitor detection
    #[arg(short = 'g', long, num_args = 4, value_names = ["WIDTH", "HEIGHT", "X", "Y"], allow_hyphen_values = true)]
    pub geometry: Option<Vec<i32>>,

    /// Zoom in at start
    #[arg(short = 'z', long)]
    pub zoom_in: bool,

    /// Only use the toggle hotkey on the control plane (legacy behavior)
    #[arg(short = 't', long)]
    pub zoom_toggle: bool,

    /// Sticky border padding as a fraction of the cell size
    #[arg(short = 'P', long)]
    pub padding: Option<f64>,

    /// Smoothing factor
    #[arg(short, long)]
    pub factor: Option<f64>,

    /// Minimum step size in pixels per tick
    #[arg(short = 'm', long)]
    pub min_step: Option<f64>,

    /// Maximum step size in pixels per tick
    #[arg(short = 'M', long)]
    pub max_step: Option<f64>,

    /// Remote zoom factor used to bound the clamp region, -1 to disable
    #[arg(short = 'Z', long, allow_hyphen_values = true)]
    pub zoom: Option<f64>,

    /// Path to a key input file for automation
    #[arg(short, long)]
    pub keyfile: Option<String>,

    /// Config file location
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// Do not persist the resolved settings
    #[arg(long)]
    pub no_save: bool,
}
