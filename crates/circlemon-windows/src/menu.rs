//! Native popup menus for the tray icon and the widget.

use circlemon_core::MenuAction;
use windows::Win32::Foundation::{HWND, LPARAM, POINT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, MF_STRING, PostMessageW,
    SetForegroundWindow, TPM_NONOTIFY, TPM_RETURNCMD, TPM_RIGHTBUTTON, TrackPopupMenuEx, WM_NULL,
};
use windows::core::HSTRING;

/// Shows a popup menu with `items` at the cursor and blocks until the
/// user picks one or dismisses it.
///
/// Runs a modal loop, so the caller must not hold any widget state
/// borrow across this call.
pub fn track(owner: HWND, items: &[MenuAction]) -> Option<MenuAction> {
    let mut point = POINT::default();
    unsafe {
        let _ = GetCursorPos(&mut point);
    }

    let menu = unsafe { CreatePopupMenu() }.ok()?;
    for item in items {
        let label = HSTRING::from(item.label());
        // SAFETY: `menu` was just created and `label` outlives the call.
        let _ = unsafe { AppendMenuW(menu, MF_STRING, item.id() as usize, &label) };
    }

    // The owner must be foreground or the menu won't close when the
    // user clicks elsewhere.
    let picked = unsafe {
        let _ = SetForegroundWindow(owner);
        let cmd = TrackPopupMenuEx(
            menu,
            (TPM_RETURNCMD | TPM_RIGHTBUTTON | TPM_NONOTIFY).0,
            point.x,
            point.y,
            owner,
            None,
        );
        let _ = PostMessageW(Some(owner), WM_NULL, WPARAM(0), LPARAM(0));
        let _ = DestroyMenu(menu);
        cmd.0
    };

    MenuAction::from_id(picked as u32)
}
