use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::warn;

/// Commands accepted between ticks, from the keyboard or the key file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleFollow,
    ToggleZoom,
    Quit,
}

pub const FOLLOW_KEY: char = 'y';
pub const ZOOM_KEY: char = 'x';
pub const QUIT_KEY: char = 'q';

pub fn command_for(ch: char) -> Option<KeyCommand> {
    match ch.to_ascii_lowercase() {
        FOLLOW_KEY => Some(KeyCommand::ToggleFollow),
        ZOOM_KEY => Some(KeyCommand::ToggleZoom),
        QUIT_KEY => Some(KeyCommand::Quit),
        _ => None,
    }
}

/// Consume one command character from the key file: read the first byte,
/// then truncate so automation can drop single characters in. IO failures
/// are logged and reported as "no command".
pub fn poll_keyfile(path: &Path) -> Option<KeyCommand> {
    if !path.exists() {
        return None;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            warn!(%error, path = %path.display(), "keyfile read failed");
            return None;
        }
    };
    let ch = content.chars().next()?;
    if let Err(error) = std::fs::write(path, "") {
        warn!(%error, path = %path.display(), "keyfile truncate failed");
    }
    command_for(ch)
}

/// Non-blocking poll of the terminal for a single keypress. Ctrl+C maps to
/// quit since raw mode swallows the interrupt signal.
pub fn poll_terminal() -> Option<KeyCommand> {
    match event::poll(Duration::ZERO) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(error) => {
            warn!(%error, "terminal poll failed");
            return None;
        }
    }
    let Ok(Event::Key(key)) = event::read() else {
        return None;
    };
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyCommand::Quit)
        }
        KeyCode::Char(ch) => command_for(ch),
        _ => None,
    }
}

/// Puts the terminal into raw mode for the run so single keypresses arrive
/// without a newline, and restores it on drop.
#[derive(Debug)]
pub struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    pub fn enable() -> Self {
        match terminal::enable_raw_mode() {
            Ok(()) => Self { enabled: true },
            Err(error) => {
                warn!(%error, "raw mode unavailable, keyboard toggles may need Enter");
                Self { enabled: false }
            }
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.enabled {
            let _ = terminal::disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{command_for, poll_keyfile, KeyCommand};
    use tempfile::tempdir;

    #[test]
    fn key_characters_map_to_commands() {
        assert_eq!(command_for('y'), Some(KeyCommand::ToggleFollow));
        assert_eq!(command_for('Y'), Some(KeyCommand::ToggleFollow));
        assert_eq!(command_for('x'), Some(KeyCommand::ToggleZoom));
        assert_eq!(command_for('q'), Some(KeyCommand::Quit));
        assert_eq!(command_for('z'), None);
    }

    #[test]
    fn keyfile_consumes_the_command() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("keys");
        std::fs::write(&path, "x").unwrap();
        assert_eq!(poll_keyfile(&path), Some(KeyCommand::ToggleZoom));
        // The file was truncated: a second poll sees nothing.
        assert_eq!(poll_keyfile(&path), None);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn missing_or_empty_keyfile_is_no_command() {
        let temp = tempdir().unwrap();
        assert_eq!(poll_keyfile(&temp.path().join("absent")), None);
        let path = temp.path().join("empty");
        std::fs::write(&path, "").unwrap();
        assert_eq!(poll_keyfile(&path), None);
    }

    #[test]
    fn unknown_keyfile_characters_are_still_consumed() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("keys");
        std::fs::write(&path, "k").unwrap();
        assert_eq!(poll_keyfile(&path), None);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
