//! Content domain: data-driven movement tuning loaded from RON files.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::MovementTuningDef;
pub use loader::{ContentLoadError, load_movement_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_tuning_from_disk);
    }
}

/// Apply `assets/data/movement.ron` over the built-in defaults. Any load or
/// validation failure keeps the defaults so the sandbox still runs; the
/// state machine itself never sees out-of-range parameters.
pub(crate) fn apply_tuning_from_disk(mut tuning: ResMut<MovementTuning>) {
    let def = match load_movement_tuning(Path::new("assets/data")) {
        Ok(def) => def,
        Err(e) => {
            warn!("{}, keeping default movement tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&def);
    if !errors.is_empty() {
        for error in &errors {
            warn!("{}", error);
        }
        warn!("movement.ron rejected, keeping default movement tuning");
        return;
    }

    *tuning = MovementTuning {
        max_speed: def.max_speed,
        jump_take_off_speed: def.jump_take_off_speed,
        jump_modifier: def.jump_modifier,
        jump_deceleration: def.jump_deceleration,
        gravity: def.gravity,
    };

    info!(
        "Loaded movement tuning: max_speed={}, takeoff={}, modifier={}, deceleration={}",
        tuning.max_speed, tuning.jump_take_off_speed, tuning.jump_modifier, tuning.jump_deceleration
    );
}
