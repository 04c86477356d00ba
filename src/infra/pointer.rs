use crate::domain::models::{Monitor, Point};

/// Current pointer position in global pixel coordinates, or `None` when the
/// platform has no supported polling backend.
#[cfg(target_os = "windows")]
pub fn cursor_position() -> Option<(i32, i32)> {
    use windows_sys::Win32::Foundation::POINT;
    use windows_sys::Win32::UI::WindowsAndMessaging::GetCursorPos;

    let mut point = POINT { x: 0, y: 0 };
    let ok = unsafe { GetCursorPos(&mut point as *mut POINT) };
    if ok == 0 {
        None
    } else {
        Some((point.x, point.y))
    }
}

#[cfg(not(target_os = "windows"))]
pub fn cursor_position() -> Option<(i32, i32)> {
    None
}

/// Translate a global sample into monitor-relative coordinates, clamped to
/// `[0, width] x [0, height]` so off-monitor positions stay on the edge.
pub fn relative_to(monitor: &Monitor, global: (i32, i32)) -> Point {
    let x = (global.0 - monitor.x).clamp(0, monitor.width) as f64;
    let y = (global.1 - monitor.y).clamp(0, monitor.height) as f64;
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::relative_to;
    use crate::domain::models::{Monitor, Point};

    fn monitor() -> Monitor {
        Monitor {
            x: 1920,
            y: 0,
            width: 2560,
            height: 1440,
        }
    }

    #[test]
    fn translates_into_monitor_space() {
        assert_eq!(
            relative_to(&monitor(), (2020, 100)),
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn clamps_samples_from_other_monitors() {
        assert_eq!(relative_to(&monitor(), (0, 0)), Point::new(0.0, 0.0));
        assert_eq!(
            relative_to(&monitor(), (9999, 9999)),
            Point::new(2560.0, 1440.0)
        );
    }
}
