pub mod init;
pub mod run;
pub mod sample;
pub mod start;

/// Exits with an error on hosts the widget cannot run on.
#[cfg(not(windows))]
pub(crate) fn unsupported_platform() -> ! {
    eprintln!("Error: circlemon only runs on Windows.");
    std::process::exit(1);
}
