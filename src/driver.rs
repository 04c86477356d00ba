use std::thread;

use tracing::{info, warn};

use crate::core::motion::pipeline::MotionPipeline;
use crate::domain::errors::ConfigError;
use crate::domain::models::Viewport;
use crate::infra::config::Settings;
use crate::infra::control::ZoomController;
use crate::infra::keys::{self, KeyCommand, RawModeGuard, FOLLOW_KEY, QUIT_KEY, ZOOM_KEY};
use crate::infra::monitors;
use crate::infra::pointer;
use crate::infra::transport::UdpSink;

/// The synchronous tick loop: sample the pointer, advance the pipeline, emit
/// one datagram, handle pending toggle commands, sleep. The pipeline stays
/// free of IO; every collaborator failure is logged and the next tick runs
/// with intact state.
pub fn run(settings: Settings, mut zoom: ZoomController) -> Result<(), ConfigError> {
    let detected = monitors::detect_monitors();
    let monitor = monitors::select_monitor(&detected, settings.monitor_index, settings.geometry)?;
    let viewport = Viewport::relative(monitor.width as f64, monitor.height as f64)?;

    let sink = UdpSink::connect(&settings.ip, settings.port)?;

    let initial = pointer::cursor_position()
        .map(|global| pointer::relative_to(&monitor, global))
        .unwrap_or_else(|| viewport.center());

    let mut pipeline = MotionPipeline::new(
        viewport,
        settings.grid,
        settings.padding,
        settings.zoom,
        settings.smoother,
        initial,
    );

    info!(
        ip = %settings.ip,
        port = settings.port,
        delay_ms = settings.delay.as_millis() as u64,
        "streaming cursor position"
    );
    info!(
        x = monitor.x,
        y = monitor.y,
        width = monitor.width,
        height = monitor.height,
        "selected monitor"
    );
    if settings.grid.is_active() {
        info!(
            columns = settings.grid.cols(),
            rows = settings.grid.rows(),
            padding = settings.padding,
            "snapping to grid"
        );
    }
    info!("press [{FOLLOW_KEY}] to toggle following, [{ZOOM_KEY}] to toggle zoom, [{QUIT_KEY}] or Ctrl+C to quit");
    if let Some(keyfile) = &settings.keyfile {
        info!(path = %keyfile.display(), "watching key file for toggle commands");
    }

    let _raw_mode = RawModeGuard::enable();
    zoom.apply_initial();

    let mut following = true;
    let mut last_raw = initial;
    let mut pointer_lost = false;

    loop {
        // With follow disabled the last raw sample is reused, so the
        // smoother keeps easing toward the last captured target.
        if following {
            match pointer::cursor_position() {
                Some(global) => {
                    last_raw = pointer::relative_to(&monitor, global);
                    pointer_lost = false;
                }
                None => {
                    if !pointer_lost {
                        warn!("pointer polling unavailable, holding last position");
                        pointer_lost = true;
                    }
                }
            }
        }

        let (x, y) = pipeline.advance(last_raw);
        if let Err(error) = sink.send(x, y) {
            warn!(%error, "udp send failed");
        }

        let command = settings
            .keyfile
            .as_deref()
            .and_then(keys::poll_keyfile)
            .or_else(keys::poll_terminal);
        match command {
            Some(KeyCommand::ToggleFollow) => {
                following = !following;
                info!(enabled = following, "mouse follow toggled");
            }
            Some(KeyCommand::ToggleZoom) => zoom.toggle(),
            Some(KeyCommand::Quit) => break,
            None => {}
        }

        if !settings.delay.is_zero() {
            thread::sleep(settings.delay);
        }
    }

    zoom.release();
    info!("disconnected");
    Ok(())
}
