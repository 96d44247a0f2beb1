/// Loads the config, starts logging, and runs the widget until the
/// user exits from the tray or context menu.
#[cfg(windows)]
pub fn execute() {
    let config = circlemon_core::config::load();
    circlemon_core::log::init(&config.logging);
    circlemon_core::log_info!("circlemon {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = circlemon_windows::run(&config) {
        circlemon_core::log_error!("widget failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
pub fn execute() {
    super::unsupported_platform();
}
