use crate::domain::models::ZoomAction;
use tracing::{debug, info, warn};

/// Boundary to the remote control plane's zoom feature. The tri-state query
/// reports `None` when the zoom state cannot be determined; a missing
/// integration is a valid state of the system, not an error.
pub trait ZoomOracle {
    fn is_zoomed_in(&self) -> Option<bool>;

    /// Fire a hotkey action on the remote side. Returns whether the trigger
    /// was delivered.
    fn trigger(&self, action: ZoomAction) -> bool;
}

/// Oracle used when no control-plane client is wired in.
#[derive(Debug, Default)]
pub struct NullZoomOracle;

impl ZoomOracle for NullZoomOracle {
    fn is_zoomed_in(&self) -> Option<bool> {
        None
    }

    fn trigger(&self, _action: ZoomAction) -> bool {
        false
    }
}

/// Action to reach `want_zoom_in` given the reported remote state. With a
/// known state (or in legacy toggle-only mode) only a mismatch triggers the
/// toggle; with an unknown state the absolute in/out action is used instead.
pub fn startup_zoom_action(
    reported: Option<bool>,
    want_zoom_in: bool,
    legacy_toggle: bool,
) -> Option<ZoomAction> {
    if legacy_toggle || reported.is_some() {
        return match reported {
            Some(state) if state != want_zoom_in => Some(ZoomAction::ToggleZoom),
            _ => None,
        };
    }
    if want_zoom_in {
        Some(ZoomAction::ZoomIn)
    } else {
        Some(ZoomAction::ZoomOut)
    }
}

/// Runtime toggle: the desired state flips to the inverse of the reported
/// state when known, else the inverse of the previous desire, and an action
/// is always fired.
pub fn toggle_zoom_action(
    reported: Option<bool>,
    previous_want: bool,
    legacy_toggle: bool,
) -> (bool, ZoomAction) {
    let want_zoom_in = match reported {
        Some(state) => !state,
        None => !previous_want,
    };
    let action = if legacy_toggle || reported.is_some() {
        ZoomAction::ToggleZoom
    } else if want_zoom_in {
        ZoomAction::ZoomIn
    } else {
        ZoomAction::ZoomOut
    };
    (want_zoom_in, action)
}

/// Drives the zoom feature through an optional oracle, tracking the desired
/// zoom state across the run.
pub struct ZoomController {
    oracle: Option<Box<dyn ZoomOracle>>,
    legacy_toggle: bool,
    want_zoom_in: bool,
}

impl ZoomController {
    pub fn new(oracle: Option<Box<dyn ZoomOracle>>, zoom_in: bool, legacy_toggle: bool) -> Self {
        Self {
            oracle,
            legacy_toggle,
            want_zoom_in: zoom_in,
        }
    }

    pub fn want_zoom_in(&self) -> bool {
        self.want_zoom_in
    }

    /// Bring the remote zoom state in line with the configured preference.
    pub fn apply_initial(&mut self) {
        let Some(oracle) = self.oracle.as_deref() else {
            debug!("no control-plane client, skipping initial zoom");
            return;
        };
        let reported = oracle.is_zoomed_in();
        match reported {
            Some(state) => info!(zoomed = state, "remote zoom state detected"),
            None => info!("remote zoom state cannot be detected"),
        }
        match startup_zoom_action(reported, self.want_zoom_in, self.legacy_toggle) {
            Some(action) => {
                if oracle.trigger(action) {
                    info!(?action, zoom_in = self.want_zoom_in, "initial zoom action triggered");
                } else {
                    warn!(?action, "initial zoom action failed");
                }
            }
            None => info!("remote zoom state already correct, skipped trigger"),
        }
    }

    /// Handle a live zoom-toggle command.
    pub fn toggle(&mut self) {
        let Some(oracle) = self.oracle.as_deref() else {
            warn!("cannot toggle zoom, no control-plane client available");
            return;
        };
        let reported = oracle.is_zoomed_in();
        let (want_zoom_in, action) = toggle_zoom_action(reported, self.want_zoom_in, self.legacy_toggle);
        self.want_zoom_in = want_zoom_in;
        if oracle.trigger(action) {
            info!(?action, zoom_in = want_zoom_in, "zoom toggled");
        } else {
            warn!(?action, "zoom toggle failed");
        }
    }

    /// Zoom back out on shutdown when the remote still reports zoomed.
    pub fn release(&mut self) {
        let Some(oracle) = self.oracle.as_deref() else {
            return;
        };
        if oracle.is_zoomed_in() != Some(true) {
            return;
        }
        self.want_zoom_in = false;
        if let Some(action) = startup_zoom_action(Some(true), false, self.legacy_toggle) {
            if oracle.trigger(action) {
                info!(?action, "zoomed out before exit");
            } else {
                warn!(?action, "zoom-out on exit failed");
            }
        }
    }
}
