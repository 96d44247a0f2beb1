//! The widget window: a borderless, per-pixel-alpha popup that shows
//! both gauges and owns the tray icon.
//!
//! Everything runs on the thread that calls [`run`]. A 1-second
//! `SetTimer` tick drives Sampler -> Presenter -> render; every other
//! message maps directly to an action. Widget state lives in a
//! `thread_local!` because the window procedure has no other context.

use std::cell::RefCell;

use circlemon_core::canvas::{RenderStyle, WIDGET_SIZE};
use circlemon_core::config::Config;
use circlemon_core::gauge::present;
use circlemon_core::{
    MenuAction, Palette, Presentation, Sampler, ShellEffect, ShellState, WidgetResult, log_debug,
    log_info, log_warn,
};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    HTCAPTION, HWND_TOP, HWND_TOPMOST, IDC_ARROW, KillTimer, LoadCursorW, MSG, PostQuitMessage,
    RegisterClassW, RegisterWindowMessageW, SW_HIDE, SW_SHOW, SWP_NOACTIVATE, SWP_SHOWWINDOW,
    SetForegroundWindow, SetTimer, SetWindowPos, ShowWindow, TranslateMessage, WM_CLOSE,
    WM_CONTEXTMENU, WM_DESTROY, WM_LBUTTONDBLCLK, WM_MOUSEWHEEL, WM_NCHITTEST,
    WM_NCLBUTTONDBLCLK, WM_NCRBUTTONUP, WM_RBUTTONUP, WM_TIMER, WNDCLASSW, WS_EX_LAYERED,
    WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};
use windows::core::w;

use crate::counters::SystemCounters;
use crate::render::{Style, render_widget};
use crate::tray::{TRAY_CALLBACK_MSG, TrayIcon};
use crate::{launch, menu, monitor};

/// Sampling period. Fixed; not exposed in the config.
const TICK_INTERVAL_MS: u32 = 1000;
const TICK_TIMER_ID: usize = 0x434D;

struct WidgetState {
    hwnd: HWND,
    sampler: Sampler<SystemCounters>,
    shell: ShellState,
    palette: Palette,
    style: Style,
    tray: TrayIcon,
    last: Option<Presentation>,
}

impl WidgetState {
    /// One timer tick: sample, present, paint.
    fn tick(&mut self) {
        let sample = self.sampler.sample();
        log_debug!(
            "cpu {:.1}% ram {:.1}/{:.1} MB",
            sample.cpu_percent,
            sample.ram_used_mb,
            sample.ram_total_mb
        );
        let presentation = present(&sample, &self.palette);
        self.tray.set_detail(&presentation.detail);
        self.last = Some(presentation);
        self.repaint();
    }

    fn repaint(&self) {
        if let Some(p) = &self.last {
            render_widget(self.hwnd, p, &self.style, self.shell.opacity());
        }
    }
}

thread_local! {
    static WIDGET: RefCell<Option<WidgetState>> = const { RefCell::new(None) };
    static TASKBAR_CREATED: std::cell::Cell<u32> = const { std::cell::Cell::new(0) };
}

/// Runs `f` against the widget state if it exists and is not already
/// borrowed further up the stack (re-entrant window messages).
fn with_state<R>(f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
    WIDGET.with(|cell| {
        let mut guard = cell.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    })
}

/// Creates the widget, places it in the bottom-right corner of the
/// monitor under the cursor, and runs the message loop until the user
/// exits.
pub fn run(config: &Config) -> WidgetResult<()> {
    enable_dpi_awareness();

    let hwnd = create_window(config.window.always_on_top)?;
    place(hwnd, config.window.always_on_top);

    let tray = match TrayIcon::add(hwnd) {
        Ok(tray) => tray,
        Err(e) => {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            return Err(e);
        }
    };
    TASKBAR_CREATED.with(|c| c.set(unsafe { RegisterWindowMessageW(w!("TaskbarCreated")) }));

    let state = WidgetState {
        hwnd,
        sampler: Sampler::new(SystemCounters::new()),
        shell: ShellState::new(config.opacity()),
        palette: config.palette(),
        style: Style {
            face: RenderStyle {
                track: config.track_color(),
                background: config.background_color(),
                background_alpha: config.background_alpha(),
            },
            text: config.text_color(),
        },
        tray,
        last: None,
    };
    WIDGET.with(|cell| *cell.borrow_mut() = Some(state));

    with_state(WidgetState::tick);
    unsafe {
        let _ = SetTimer(Some(hwnd), TICK_TIMER_ID, TICK_INTERVAL_MS, None);
    }
    log_info!("widget started");

    run_message_pump();

    log_info!("widget stopped");
    Ok(())
}

/// Declares this process as per-monitor DPI aware (V2) so monitor work
/// areas and window positions are raw pixels on every monitor.
fn enable_dpi_awareness() {
    // SAFETY: safe to call once at startup. Fails harmlessly if the
    // awareness was already set via manifest.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}

fn create_window(always_on_top: bool) -> WidgetResult<HWND> {
    let class_name = w!("CirclemonWidget");
    let wc = WNDCLASSW {
        lpfnWndProc: Some(widget_wnd_proc),
        lpszClassName: class_name,
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default(),
        ..Default::default()
    };

    if unsafe { RegisterClassW(&wc) } == 0 {
        return Err("failed to register the widget window class".into());
    }

    // WS_EX_TOOLWINDOW: no taskbar entry; the tray icon stands in for it.
    let mut ex = WS_EX_LAYERED | WS_EX_TOOLWINDOW;
    if always_on_top {
        ex |= WS_EX_TOPMOST;
    }

    let hwnd = unsafe {
        CreateWindowExW(
            ex,
            class_name,
            w!("CPU & RAM Monitor"),
            WS_POPUP,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            WIDGET_SIZE,
            WIDGET_SIZE,
            None,
            None,
            None,
            None,
        )?
    };
    Ok(hwnd)
}

/// Anchors the window's bottom-right corner to the work area of the
/// monitor under the cursor and shows it.
fn place(hwnd: HWND, always_on_top: bool) {
    let (x, y) = match monitor::work_area_under_cursor() {
        Ok(work) => work.anchor_bottom_right(WIDGET_SIZE, WIDGET_SIZE),
        Err(e) => {
            log_warn!("could not read monitor work area: {e}");
            (0, 0)
        }
    };
    let after = if always_on_top { HWND_TOPMOST } else { HWND_TOP };
    unsafe {
        let _ = SetWindowPos(
            hwnd,
            Some(after),
            x,
            y,
            WIDGET_SIZE,
            WIDGET_SIZE,
            SWP_NOACTIVATE | SWP_SHOWWINDOW,
        );
    }
}

/// Performs a shell effect. Must be called without a state borrow:
/// `ShowWindow` and `DestroyWindow` send messages synchronously.
fn perform(hwnd: HWND, effect: ShellEffect) {
    match effect {
        ShellEffect::None => {}
        ShellEffect::Restore => {
            unsafe {
                let _ = ShowWindow(hwnd, SW_SHOW);
                let _ = SetForegroundWindow(hwnd);
            }
            with_state(|s| s.repaint());
        }
        ShellEffect::Hide => unsafe {
            let _ = ShowWindow(hwnd, SW_HIDE);
        },
        ShellEffect::Repaint => {
            with_state(|s| s.repaint());
        }
        ShellEffect::Close => unsafe {
            let _ = DestroyWindow(hwnd);
        },
    }
}

/// Shows a context menu and performs whatever the user picked.
fn context_menu(hwnd: HWND, items: &[MenuAction]) {
    let Some(action) = menu::track(hwnd, items) else {
        return;
    };
    log_debug!("menu action {action:?}");
    if let Some(effect) = with_state(|s| s.shell.apply(action)) {
        perform(hwnd, effect);
    }
}

/// Signed wheel delta from the high word of `WM_MOUSEWHEEL`'s wParam.
fn wheel_delta(wparam: WPARAM) -> i32 {
    i32::from(((wparam.0 >> 16) & 0xFFFF) as u16 as i16)
}

unsafe extern "system" fn widget_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_TIMER if wparam.0 == TICK_TIMER_ID => {
            with_state(WidgetState::tick);
            LRESULT(0)
        }
        // The whole widget acts as a caption so the system handles
        // left-button drags.
        WM_NCHITTEST => LRESULT(HTCAPTION as isize),
        WM_NCLBUTTONDBLCLK | WM_LBUTTONDBLCLK => {
            launch::open_task_manager(hwnd);
            LRESULT(0)
        }
        WM_NCRBUTTONUP | WM_RBUTTONUP | WM_CONTEXTMENU => {
            context_menu(hwnd, MenuAction::WIDGET_MENU);
            LRESULT(0)
        }
        WM_MOUSEWHEEL => {
            let delta = wheel_delta(wparam);
            if let Some(effect) = with_state(|s| s.shell.scroll(delta)) {
                perform(hwnd, effect);
            }
            LRESULT(0)
        }
        TRAY_CALLBACK_MSG => {
            let mouse_msg = (lparam.0 & 0xFFFF) as u32;
            match mouse_msg {
                WM_LBUTTONDBLCLK => {
                    if let Some(effect) = with_state(|s| s.shell.restore()) {
                        perform(hwnd, effect);
                    }
                }
                WM_RBUTTONUP | WM_CONTEXTMENU => context_menu(hwnd, MenuAction::TRAY_MENU),
                _ => {}
            }
            LRESULT(0)
        }
        WM_CLOSE => {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            LRESULT(0)
        }
        WM_DESTROY => {
            unsafe {
                let _ = KillTimer(Some(hwnd), TICK_TIMER_ID);
            }
            // Dropping the state removes the tray icon.
            let state = WIDGET.with(|cell| cell.try_borrow_mut().ok().and_then(|mut s| s.take()));
            drop(state);
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ if msg != 0 && msg == TASKBAR_CREATED.with(|c| c.get()) => {
            if let Some(Err(e)) = with_state(|s| s.tray.restore()) {
                log_warn!("could not re-add tray icon: {e}");
            }
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

/// The Win32 message pump. Blocks until `WM_QUIT` is received.
fn run_message_pump() {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_up_is_positive() {
        let wparam = WPARAM((120usize) << 16);
        assert_eq!(wheel_delta(wparam), 120);
    }

    #[test]
    fn wheel_down_is_negative() {
        let wparam = WPARAM(((-120i16 as u16) as usize) << 16 | 0x0008);
        assert_eq!(wheel_delta(wparam), -120);
    }
}
