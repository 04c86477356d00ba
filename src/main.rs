use std::process::ExitCode;

use clap::Parser;
use tracing::warn;

use cursorlens::cli::Cli;
use cursorlens::domain::errors::ConfigError;
use cursorlens::driver;
use cursorlens::infra::config::{self, Settings, StoredConfig};
use cursorlens::infra::control::ZoomController;
use cursorlens::infra::logging::init_tracing;
use cursorlens::infra::monitors;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    if cli.list_monitors {
        print!(
            "{}",
            monitors::format_monitor_list(&monitors::detect_monitors())
        );
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    let config_path = cli.config_file.clone().or_else(config::default_config_path);
    let stored = match &config_path {
        Some(path) => config::load(path)?,
        None => StoredConfig::default(),
    };
    let settings = Settings::resolve(&cli, &stored)?;

    if !cli.no_save {
        if let Some(path) = &config_path {
            match config::save_if_changed(path, &stored, settings.to_stored()) {
                Ok(true) => tracing::info!(path = %path.display(), "saved settings for the next run"),
                Ok(false) => {}
                Err(error) => warn!(%error, "failed to save settings"),
            }
        }
    }

    // No control-plane client is wired in this build; the controller logs
    // and tracks state through the null seam.
    let zoom = ZoomController::new(None, settings.zoom_in, settings.zoom_toggle);
    driver::run(settings, zoom)
}
