use std::mem;

use circlemon_core::{Rect, WidgetResult};
use windows::Win32::Foundation::POINT;
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromPoint,
};
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

/// Returns the work area of the monitor under the mouse cursor.
///
/// The work area excludes the taskbar and any docked toolbars. If the
/// cursor position cannot be read, the monitor nearest the virtual
/// screen origin is used.
pub fn work_area_under_cursor() -> WidgetResult<Rect> {
    let mut point = POINT::default();
    // SAFETY: GetCursorPos writes into a live POINT.
    if unsafe { GetCursorPos(&mut point) }.is_err() {
        point = POINT::default();
    }
    // SAFETY: MONITOR_DEFAULTTONEAREST always yields a monitor handle.
    let monitor = unsafe { MonitorFromPoint(point, MONITOR_DEFAULTTONEAREST) };
    if monitor.is_invalid() {
        return Err("no monitor found near the cursor".into());
    }
    work_area_for_monitor(monitor)
}

/// Queries the work area for a given monitor handle.
fn work_area_for_monitor(monitor: HMONITOR) -> WidgetResult<Rect> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct with
    // monitor dimensions. We set cbSize as required by the API.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };

    if !success.as_bool() {
        return Err("Failed to get monitor info".into());
    }

    let rc = info.rcWork;
    Ok(Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom))
}
