//! Content domain: serde definitions for data files.

use serde::{Deserialize, Serialize};

/// On-disk movement tuning, deserialized from `assets/data/movement.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementTuningDef {
    pub max_speed: f32,
    pub jump_take_off_speed: f32,
    pub jump_modifier: f32,
    pub jump_deceleration: f32,
    pub gravity: f32,
}
