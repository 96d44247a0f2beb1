#[cfg(windows)]
use std::os::windows::process::CommandExt;
#[cfg(windows)]
use std::process::{Command, Stdio};

/// `CREATE_NEW_PROCESS_GROUP` (0x200) keeps Ctrl+C in the terminal
/// from reaching the widget; `CREATE_NO_WINDOW` (0x08000000) keeps it
/// from owning a console window.
#[cfg(windows)]
const DETACH_FLAGS: u32 = 0x08000000 | 0x00000200;

/// Re-spawns this executable with `run` as a detached process so the
/// terminal can be closed while the widget keeps running.
#[cfg(windows)]
pub fn execute() {
    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: could not locate the circlemon executable: {e}");
            std::process::exit(1);
        }
    };

    let spawned = Command::new(exe)
        .arg("run")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn();

    match spawned {
        Ok(mut child) => {
            let pid = child.id();
            // Acknowledge the child without blocking so it outlives us.
            let _ = child.try_wait();
            println!("circlemon started (PID: {pid}). Use the tray icon to exit.");
        }
        Err(e) => {
            eprintln!("Error: failed to start circlemon: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
pub fn execute() {
    super::unsupported_platform();
}
