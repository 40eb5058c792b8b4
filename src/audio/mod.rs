//! Audio domain: one-shot playback for jump feedback.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::movement::{JumpedEvent, MovementSet};
use crate::scheduler::drain_scheduler;

/// Pitch spread per shot so repeated jumps don't sound stamped.
const JUMP_PITCH_VARIANCE: f32 = 0.05;

/// Handles for movement sound effects. Optional: when the resource is
/// missing, playback is skipped without failing the tick.
#[derive(Resource, Debug)]
pub struct MovementAudio {
    pub jump: Handle<AudioSource>,
}

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_movement_audio).add_systems(
            Update,
            play_jump_audio
                .in_set(MovementSet::Effects)
                .after(drain_scheduler),
        );
    }
}

pub(crate) fn load_movement_audio(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(MovementAudio {
        jump: asset_server.load("audio/jump.ogg"),
    });
}

/// Fire-and-forget jump sound. A missing audio resource is a no-op, not an
/// error: the jump itself already happened.
pub(crate) fn play_jump_audio(
    mut events: MessageReader<JumpedEvent>,
    audio: Option<Res<MovementAudio>>,
    mut commands: Commands,
) {
    for event in events.read() {
        let Some(audio) = audio.as_ref() else {
            continue;
        };

        let pitch = 1.0 + rand::rng().random_range(-JUMP_PITCH_VARIANCE..JUMP_PITCH_VARIANCE);
        commands.spawn((
            AudioPlayer::new(audio.jump.clone()),
            PlaybackSettings::DESPAWN.with_speed(pitch),
        ));
        debug!("Jump one-shot: actor={:?}, pitch={:.2}", event.actor, pitch);
    }
}
