//! Launching Task Manager from the widget.

use circlemon_core::{WidgetResult, log_error, log_info};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW, SW_SHOWNORMAL};
use windows::core::{HSTRING, PCWSTR, w};

/// Starts Task Manager. On failure, shows a blocking error dialog
/// owned by `owner`.
pub fn open_task_manager(owner: HWND) {
    match spawn_task_manager() {
        Ok(()) => log_info!("launched task manager"),
        Err(e) => {
            log_error!("failed to launch task manager: {e}");
            show_error(owner, &format!("Failed to open Task Manager.\n{e}"));
        }
    }
}

/// Shows a modal error message box.
pub fn show_error(owner: HWND, message: &str) {
    unsafe {
        let _ = MessageBoxW(
            Some(owner),
            &HSTRING::from(message),
            w!("Error"),
            MB_OK | MB_ICONERROR,
        );
    }
}

/// Uses `ShellExecuteW` rather than `CreateProcess` so the elevation
/// prompt Task Manager may need is shown instead of failing outright.
fn spawn_task_manager() -> WidgetResult<()> {
    let result = unsafe {
        ShellExecuteW(
            None,
            w!("open"),
            w!("taskmgr.exe"),
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };
    match shell_execute_error(result.0 as isize) {
        Some(message) => Err(message.into()),
        None => Ok(()),
    }
}

/// Interprets a `ShellExecuteW` return value. Values above 32 mean
/// success.
fn shell_execute_error(code: isize) -> Option<String> {
    match code {
        c if c > 32 => None,
        0 => Some("The system is out of memory or resources.".into()),
        // These coincide with the Win32 error codes of the same value.
        2 | 3 | 5 | 8 | 11 => Some(std::io::Error::from_raw_os_error(code as i32).to_string()),
        c => Some(format!("ShellExecute failed with code {c}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_above_32_are_success() {
        assert_eq!(shell_execute_error(33), None);
        assert_eq!(shell_execute_error(4096), None);
    }

    #[test]
    fn zero_is_out_of_memory() {
        assert!(shell_execute_error(0).unwrap().contains("out of memory"));
    }

    #[test]
    fn unknown_low_codes_name_the_code() {
        assert_eq!(
            shell_execute_error(31).as_deref(),
            Some("ShellExecute failed with code 31")
        );
    }

    #[test]
    fn file_not_found_uses_os_message() {
        assert!(shell_execute_error(2).is_some());
    }
}
