//! Content domain: range validation for tuning definitions.

use super::data::MovementTuningDef;

/// A validation error with context about which field is out of range.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "movement tuning field '{}': {}", self.field, self.message)
    }
}

/// Validate a tuning definition before it reaches the state machine, which
/// assumes in-range parameters.
pub fn validate_tuning(def: &MovementTuningDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if def.max_speed <= 0.0 {
        errors.push(ValidationError {
            field: "max_speed",
            message: format!("must be positive, got {}", def.max_speed),
        });
    }
    if def.jump_take_off_speed <= 0.0 {
        errors.push(ValidationError {
            field: "jump_take_off_speed",
            message: format!("must be positive, got {}", def.jump_take_off_speed),
        });
    }
    if def.jump_modifier <= 0.0 {
        errors.push(ValidationError {
            field: "jump_modifier",
            message: format!("must be positive, got {}", def.jump_modifier),
        });
    }
    if !(0.0..=1.0).contains(&def.jump_deceleration) {
        errors.push(ValidationError {
            field: "jump_deceleration",
            message: format!("must be within 0..=1, got {}", def.jump_deceleration),
        });
    }
    if def.gravity < 0.0 {
        errors.push(ValidationError {
            field: "gravity",
            message: format!("must be non-negative, got {}", def.gravity),
        });
    }

    errors
}
