//! Sanity checks for loaded settings.

use super::data::ControllerSettings;

/// A setting with a value the controller can't work with.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

/// Helper macro for checking a numeric bound
macro_rules! check {
    ($issues:expr, $cond:expr, $field:expr, $value:expr, $expected:expr) => {
        if !$cond {
            $issues.push(ConfigIssue {
                field: $field,
                message: format!("is {}, expected {}", $value, $expected),
            });
        }
    };
}

/// Validate all settings.
/// Returns a list of issues, empty if everything is usable.
pub fn validate_settings(settings: &ControllerSettings) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let controller = &settings.controller;
    let world = &settings.world;

    check!(
        issues,
        controller.move_speed > 0.0,
        "move_speed",
        controller.move_speed,
        "> 0"
    );
    check!(
        issues,
        controller.jump_force > 0.0,
        "jump_force",
        controller.jump_force,
        "> 0"
    );
    check!(
        issues,
        controller.gravity_scale >= 0.0,
        "gravity_scale",
        controller.gravity_scale,
        ">= 0"
    );
    check!(
        issues,
        controller.jump_buffer_duration >= 0.0,
        "jump_buffer_duration",
        controller.jump_buffer_duration,
        ">= 0"
    );
    check!(
        issues,
        world.fixed_timestep_hz > 0.0,
        "fixed_timestep_hz",
        world.fixed_timestep_hz,
        "> 0"
    );

    if controller.ground_layers.is_empty() {
        issues.push(ConfigIssue {
            field: "ground_layers",
            message: "is empty, the ground probe can never hit".to_string(),
        });
    }

    if world.gravity[1] >= 0.0 {
        issues.push(ConfigIssue {
            field: "gravity",
            message: format!(
                "is {:?}, characters will never land without downward gravity",
                world.gravity
            ),
        });
    }

    issues
}
