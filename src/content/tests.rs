//! Content domain: tests for settings parsing, defaults and validation.

use bevy::prelude::*;
use std::path::Path;

use super::loader::parse_settings;
use super::{ControllerSettings, load_settings, validate_settings};
use crate::movement::{ControllerConfig, GameLayer, layer_mask};

const SHIPPED_SETTINGS: &str = include_str!("../../assets/data/controller.ron");

#[test]
fn test_shipped_settings_parse() {
    let settings = parse_settings(SHIPPED_SETTINGS, "controller.ron").expect("shipped settings");
    assert_eq!(settings.schema_version, 1);
    assert_eq!(settings.controller.ground_layers, vec![GameLayer::Ground]);
    assert_eq!(settings.world.gravity(), Vec2::new(0.0, -9.81));
    assert_eq!(settings.world.fixed_timestep_hz, 50.0);
}

#[test]
fn test_shipped_settings_match_defaults() {
    let settings = parse_settings(SHIPPED_SETTINGS, "controller.ron").expect("shipped settings");
    assert_eq!(settings, ControllerSettings::default());
    assert_eq!(settings.controller.to_config(), ControllerConfig::default());
}

#[test]
fn test_shipped_settings_are_valid() {
    let settings = parse_settings(SHIPPED_SETTINGS, "controller.ron").expect("shipped settings");
    assert!(validate_settings(&settings).is_empty());
}

#[test]
fn test_to_config_builds_layer_mask() {
    let mut settings = ControllerSettings::default();
    settings.controller.ground_layers = vec![GameLayer::Ground, GameLayer::Default];
    settings.controller.move_speed = 8.0;

    let config = settings.controller.to_config();
    assert_eq!(config.move_speed, 8.0);
    assert_eq!(
        config.ground_layers,
        layer_mask(&[GameLayer::Ground, GameLayer::Default])
    );
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_settings("(schema_version: 1,", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_parse_rejects_unknown_layer() {
    let contents = SHIPPED_SETTINGS.replace("[Ground]", "[Lava]");
    assert!(parse_settings(&contents, "controller.ron").is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_settings(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_validation_flags_bad_values() {
    let mut settings = ControllerSettings::default();
    settings.controller.move_speed = 0.0;
    settings.controller.jump_force = -1.0;
    settings.controller.gravity_scale = -2.0;
    settings.controller.jump_buffer_duration = -0.1;
    settings.controller.ground_layers.clear();
    settings.world.fixed_timestep_hz = 0.0;
    settings.world.gravity = [0.0, 9.81];

    let issues = validate_settings(&settings);
    let fields: Vec<&str> = issues.iter().map(|issue| issue.field).collect();
    assert_eq!(
        fields,
        vec![
            "move_speed",
            "jump_force",
            "gravity_scale",
            "jump_buffer_duration",
            "fixed_timestep_hz",
            "ground_layers",
            "gravity",
        ]
    );
}

#[test]
fn test_zero_buffer_is_allowed() {
    let mut settings = ControllerSettings::default();
    settings.controller.jump_buffer_duration = 0.0;
    assert!(validate_settings(&settings).is_empty());
}
