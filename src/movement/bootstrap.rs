//! Movement domain: player bootstrap and test level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerSettings;
use crate::movement::{
    GameLayer, Ground, GroundProbe, GroundSensor, Inspected, PlatformerController, Player,
};

const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 1.0);

/// Spawn the player from the loaded controller settings.
pub(crate) fn spawn_player(
    mut commands: Commands,
    settings: Res<ControllerSettings>,
    gravity: Res<Gravity>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let config = settings.controller.to_config();
    info!(
        "Spawning player: move_speed={}, jump_force={}, gravity_scale={}, jump_buffer={}s, jump_height={:.2}",
        config.move_speed,
        config.jump_force,
        config.gravity_scale,
        config.jump_buffer_duration,
        config.jump_height(gravity.0.y)
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            Inspected,
            GroundSensor::new(GroundProbe::new(config.probe_offset)),
            PlatformerController::new(config),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(5.0, 0.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the controller
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let slabs = [
        // Floor
        (Vec2::new(0.0, -3.0), Vec2::new(16.0, 1.0), ground_color),
        // Platform 1 - left side
        (Vec2::new(-4.0, -2.0), Vec2::new(3.0, 0.4), platform_color),
        // Platform 2 - center, higher
        (Vec2::new(-1.0, -1.2), Vec2::new(2.5, 0.4), platform_color),
        // Platform 3 - right side, highest
        (Vec2::new(2.5, -0.4), Vec2::new(2.5, 0.4), platform_color),
    ];

    for (center, size, color) in slabs {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}
