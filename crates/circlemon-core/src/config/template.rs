/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `circlemon init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# circlemon configuration
# Location: ~/.config/circlemon/config.toml
#
# CPU and RAM are sampled once per second. The interval is fixed.

[window]
# Opacity at startup in percent (30 to 100, steps of 5).
# Scroll the mouse wheel over the widget to change it while running.
opacity = 100
# Keep the widget above other windows.
always_on_top = true

[colors]
# Ring color below 50% usage.
low = "#32cd32"
# Ring color from 50% up to 80% usage.
moderate = "#ffd700"
# Ring color at 80% usage and above.
high = "#ff0000"
# Unfilled part of each ring.
track = "#3c3c3c"
# Label text.
text = "#ffffff"
# Disc behind the rings and its opacity in percent.
background = "#1e1e1e"
background_opacity = 60

[logging]
# Enable file logging to ~/.config/circlemon/logs/circlemon.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
