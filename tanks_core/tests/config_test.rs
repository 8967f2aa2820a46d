use tanks_core::{ConfigError, TankConfig, TankPalette};
use test_log::test;

#[test]
fn test_defaults() {
    let config = TankConfig::default();
    assert_eq!(config.scale, 0.35);
    assert_eq!(config.barrel_turn_speed, 0.025);
    assert_eq!(config.barrel_move_interval, 100);
    assert_eq!(config.tread_speed, 1.1);
    assert_eq!(config.slow_motion_multiplier, 0.4);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_is_default() {
    let config = TankConfig::from_json("{}").unwrap();
    assert_eq!(config, TankConfig::default());
}

#[test]
fn test_partial_json_overrides() {
    let config = TankConfig::from_json(r#"{ "scale": 0.5, "barrel_move_interval": 60 }"#).unwrap();
    assert_eq!(config.scale, 0.5);
    assert_eq!(config.barrel_move_interval, 60);
    assert_eq!(config.tread_speed, 1.1);
}

#[test]
fn test_malformed_json() {
    let err = TankConfig::from_json("{ scale: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_rejects_non_positive_values() {
    let err = TankConfig::from_json(r#"{ "tread_speed": 0.0 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NonPositive {
            field: "tread_speed",
            ..
        }
    ));

    let err = TankConfig::from_json(r#"{ "scale": -1.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositive { field: "scale", .. }));
}

#[test]
fn test_rejects_zero_interval() {
    let err = TankConfig::from_json(r#"{ "barrel_move_interval": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroInterval));
}

#[test]
fn test_rejects_spawn_band_outside_canvas() {
    let err = TankConfig::from_json(r#"{ "spawn_band": 1.5 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::SpawnBand(band) if band == 1.5));
}

#[test]
fn test_palette_partial_json() {
    let palette: TankPalette = serde_json::from_str(r##"{ "body": "#00FF00" }"##).unwrap();
    assert_eq!(palette.body, "#00FF00");
    assert_eq!(palette.outline, TankPalette::default().outline);
}
