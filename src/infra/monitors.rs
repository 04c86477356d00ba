use crate::domain::errors::ConfigError;
use crate::domain::models::Monitor;

/// Enumerate attached monitors in global pixel coordinates.
#[cfg(target_os = "windows")]
pub fn detect_monitors() -> Vec<Monitor> {
    use windows_sys::Win32::Foundation::{BOOL, LPARAM, RECT, TRUE};
    use windows_sys::Win32::Graphics::Gdi::{
        EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
    };

    unsafe extern "system" fn push_monitor(
        handle: HMONITOR,
        _hdc: HDC,
        _clip: *mut RECT,
        data: LPARAM,
    ) -> BOOL {
        let monitors = &mut *(data as *mut Vec<Monitor>);
        let mut info: MONITORINFO = std::mem::zeroed();
        info.cbSize = std::mem::size_of::<MONITORINFO>() as u32;
        if GetMonitorInfoW(handle, &mut info) != 0 {
            let rect = info.rcMonitor;
            monitors.push(Monitor {
                x: rect.left,
                y: rect.top,
                width: rect.right - rect.left,
                height: rect.bottom - rect.top,
            });
        }
        TRUE
    }

    let mut monitors: Vec<Monitor> = Vec::new();
    unsafe {
        EnumDisplayMonitors(
            std::ptr::null_mut(),
            std::ptr::null(),
            Some(push_monitor),
            &mut monitors as *mut Vec<Monitor> as LPARAM,
        );
    }
    monitors
}

#[cfg(not(target_os = "windows"))]
pub fn detect_monitors() -> Vec<Monitor> {
    Vec::new()
}

/// Pick the viewport rectangle for a run. An explicit geometry override wins;
/// otherwise the indexed monitor from the detected list. A bad index or an
/// empty list with no override is startup-fatal.
pub fn select_monitor(
    monitors: &[Monitor],
    index: usize,
    geometry: Option<Monitor>,
) -> Result<Monitor, ConfigError> {
    if let Some(geometry) = geometry {
        return Ok(geometry);
    }
    if monitors.is_empty() {
        return Err(ConfigError::MonitorDetectionUnavailable);
    }
    monitors
        .get(index)
        .copied()
        .ok_or(ConfigError::MonitorOutOfRange {
            index,
            available: monitors.len(),
        })
}

pub fn format_monitor_list(monitors: &[Monitor]) -> String {
    if monitors.is_empty() {
        return "no monitors detected\n".to_string();
    }
    let mut out = String::new();
    for (idx, m) in monitors.iter().enumerate() {
        out.push_str(&format!(
            "[{idx}] x={} y={} width={} height={}\n",
            m.x, m.y, m.width, m.height
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_monitor_list, select_monitor};
    use crate::domain::models::Monitor;

    fn monitors() -> Vec<Monitor> {
        vec![
            Monitor {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            },
            Monitor {
                x: 1920,
                y: 0,
                width: 2560,
                height: 1440,
            },
        ]
    }

    #[test]
    fn selects_by_index() {
        let m = select_monitor(&monitors(), 1, None).unwrap();
        assert_eq!(m.width, 2560);
    }

    #[test]
    fn out_of_range_index_is_fatal() {
        assert!(select_monitor(&monitors(), 2, None).is_err());
    }

    #[test]
    fn geometry_override_skips_detection() {
        let geometry = Monitor {
            x: 10,
            y: 20,
            width: 800,
            height: 600,
        };
        let m = select_monitor(&[], 5, Some(geometry)).unwrap();
        assert_eq!(m, geometry);
    }

    #[test]
    fn empty_list_without_override_is_fatal() {
        assert!(select_monitor(&[], 0, None).is_err());
    }

    #[test]
    fn list_formatting_matches_one_line_per_monitor() {
        let text = format_monitor_list(&monitors());
        assert_eq!(
            text,
            "[0] x=0 y=0 width=1920 height=1080\n[1] x=1920 y=0 width=2560 height=1440\n"
        );
    }
}
