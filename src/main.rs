mod audio;
mod content;
mod core;
mod movement;
mod scheduler;
mod sprites;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Springheel".to_string(),
                resolution: (1280.0, 720.0).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            scheduler::SchedulerPlugin,
            audio::AudioPlugin,
            sprites::SpritesPlugin,
        ))
        .run();
}
