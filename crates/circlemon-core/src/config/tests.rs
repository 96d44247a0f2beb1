use super::loader::parse;
use super::template::generate_config;
use super::*;

#[test]
fn default_config_has_expected_values() {
    // Arrange / Act
    let mut config = Config::default();
    config.validate();

    // Assert
    assert_eq!(config.window.opacity, 100);
    assert!(config.window.always_on_top);
    assert_eq!(config.palette(), Palette::default());
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[window]\nopacity = 80\n";

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.window.opacity, 80);
    assert!(config.window.always_on_top); // default
    assert_eq!(config.colors.low, "#32cd32"); // default
    assert_eq!(config.logging.level, "info"); // default
}

#[test]
fn out_of_range_opacity_is_clamped() {
    let low = parse("[window]\nopacity = 5\n").unwrap();
    let high = parse("[window]\nopacity = 400\n").unwrap();
    let odd = parse("[window]\nopacity = 83\n").unwrap();

    assert_eq!(low.opacity().percent(), 30);
    assert_eq!(high.opacity().percent(), 100);
    assert_eq!(odd.window.opacity, 80);
}

#[test]
fn invalid_color_falls_back_to_default() {
    // Arrange
    let toml_str = "[colors]\nhigh = \"crimson\"\nlow = \"#00FF00\"\n";

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.colors.high, "#ff0000");
    assert_eq!(config.colors.low, "#00ff00");
    assert_eq!(config.palette().low, Color::new(0, 0xff, 0));
}

#[test]
fn background_opacity_is_clamped() {
    let config = parse("[colors]\nbackground_opacity = 150\n").unwrap();
    assert_eq!(config.colors.background_opacity, 100);
    assert_eq!(config.background_alpha(), 255);
}

#[test]
fn default_background_alpha_is_sixty_percent() {
    let config = Config::default();

    assert_eq!(config.background_alpha(), 153);
}

#[test]
fn unknown_poll_interval_key_is_ignored() {
    let config = parse("[window]\ninterval_ms = 250\n").unwrap();
    assert_eq!(config.window.opacity, 100);
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(parse("[window\nopacity = ").is_err());
}

#[test]
fn template_parses_to_defaults() {
    // Arrange
    let template = generate_config();

    // Act
    let config = parse(&template).unwrap();

    // Assert
    let defaults = Config::default();
    assert_eq!(config.window.opacity, defaults.window.opacity);
    assert_eq!(config.colors.track, defaults.colors.track);
    assert_eq!(config.colors.background_opacity, 60);
    assert_eq!(config.logging.max_file_mb, defaults.logging.max_file_mb);
}

#[test]
fn config_roundtrips_through_toml() {
    let mut config = Config::default();
    config.window.opacity = 55;

    let serialized = toml::to_string(&config).unwrap();
    let parsed = parse(&serialized).unwrap();

    assert_eq!(parsed.window.opacity, 55);
}
