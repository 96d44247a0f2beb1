//! Notification-area icon via `Shell_NotifyIconW`.
//!
//! Mouse input on the icon arrives at the owner window as
//! [`TRAY_CALLBACK_MSG`] with the mouse message in `lParam`.

use std::mem;

use circlemon_core::WidgetResult;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Shell::{
    NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NIM_MODIFY, NOTIFY_ICON_MESSAGE,
    NOTIFYICONDATAW, Shell_NotifyIconW,
};
use windows::Win32::UI::WindowsAndMessaging::{HICON, IDI_APPLICATION, LoadIconW, WM_APP};

/// Window message the shell posts for tray icon mouse input.
pub const TRAY_CALLBACK_MSG: u32 = WM_APP + 1;

/// Fixed first line of the tray tooltip.
pub const TITLE: &str = "CPU & RAM Monitor";

const TRAY_ID: u32 = 1;

/// Capacity of `NOTIFYICONDATAW::szTip`, including the terminator.
const TIP_CAPACITY: usize = 128;

/// A registered tray icon. Removed from the notification area on drop.
pub struct TrayIcon {
    hwnd: HWND,
    icon: HICON,
    tip: String,
}

impl TrayIcon {
    /// Adds the icon for `hwnd` with the default application icon.
    pub fn add(hwnd: HWND) -> WidgetResult<Self> {
        // SAFETY: loading a stock system icon needs no module handle.
        let icon = unsafe { LoadIconW(None, IDI_APPLICATION)? };
        let tray = Self {
            hwnd,
            icon,
            tip: TITLE.to_string(),
        };
        tray.notify(NIM_ADD)?;
        Ok(tray)
    }

    /// Re-adds the icon after Explorer restarts (`TaskbarCreated`).
    pub fn restore(&self) -> WidgetResult<()> {
        self.notify(NIM_ADD)
    }

    /// Updates the tooltip to the title plus a detail line.
    pub fn set_detail(&mut self, detail: &str) {
        let tip = format!("{TITLE}\n{detail}");
        if tip == self.tip {
            return;
        }
        self.tip = tip;
        let _ = self.notify(NIM_MODIFY);
    }

    fn notify(&self, message: NOTIFY_ICON_MESSAGE) -> WidgetResult<()> {
        let data = NOTIFYICONDATAW {
            cbSize: mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: self.hwnd,
            uID: TRAY_ID,
            uFlags: NIF_MESSAGE | NIF_ICON | NIF_TIP,
            uCallbackMessage: TRAY_CALLBACK_MSG,
            hIcon: self.icon,
            szTip: encode_tip(&self.tip),
            ..Default::default()
        };
        // SAFETY: `data` is fully initialised with cbSize set.
        let ok = unsafe { Shell_NotifyIconW(message, &data) };
        if !ok.as_bool() {
            return Err("Shell_NotifyIconW failed".into());
        }
        Ok(())
    }
}

impl Drop for TrayIcon {
    fn drop(&mut self) {
        let _ = self.notify(NIM_DELETE);
    }
}

/// Encodes a tooltip as a NUL-terminated UTF-16 buffer, truncating
/// whatever does not fit.
fn encode_tip(text: &str) -> [u16; TIP_CAPACITY] {
    let mut buf = [0u16; TIP_CAPACITY];
    for (slot, unit) in buf[..TIP_CAPACITY - 1].iter_mut().zip(text.encode_utf16()) {
        *slot = unit;
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tip_is_nul_terminated() {
        let buf = encode_tip("CPU");
        assert_eq!(&buf[..4], &[b'C' as u16, b'P' as u16, b'U' as u16, 0]);
    }

    #[test]
    fn long_tip_is_truncated_with_terminator() {
        let long = "x".repeat(500);
        let buf = encode_tip(&long);
        assert_eq!(buf[TIP_CAPACITY - 2], b'x' as u16);
        assert_eq!(buf[TIP_CAPACITY - 1], 0);
    }
}
