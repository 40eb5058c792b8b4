//! Content domain: tests for tuning parsing and validation.

use super::{MovementTuningDef, validate_tuning};

fn valid_def() -> MovementTuningDef {
    MovementTuningDef {
        max_speed: 320.0,
        jump_take_off_speed: 450.0,
        jump_modifier: 1.5,
        jump_deceleration: 0.5,
        gravity: 1800.0,
    }
}

#[test]
fn test_parse_movement_tuning_ron() {
    let src = r#"MovementTuningDef(
        max_speed: 320.0,
        jump_take_off_speed: 450.0,
        jump_modifier: 1.5,
        jump_deceleration: 0.5,
        gravity: 1800.0,
    )"#;

    let def: MovementTuningDef = ron::from_str(src).unwrap();
    assert_eq!(def.jump_modifier, 1.5);
    assert!(validate_tuning(&def).is_empty());
}

#[test]
fn test_valid_defaults_pass_validation() {
    assert!(validate_tuning(&valid_def()).is_empty());
}

#[test]
fn test_negative_deceleration_is_rejected() {
    let def = MovementTuningDef {
        jump_deceleration: -0.5,
        ..valid_def()
    };

    let errors = validate_tuning(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "jump_deceleration");
}

#[test]
fn test_deceleration_above_one_is_rejected() {
    let def = MovementTuningDef {
        jump_deceleration: 1.5,
        ..valid_def()
    };

    let errors = validate_tuning(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "jump_deceleration");
}

#[test]
fn test_zero_max_speed_is_rejected() {
    let def = MovementTuningDef {
        max_speed: 0.0,
        ..valid_def()
    };

    let errors = validate_tuning(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "max_speed");
}

#[test]
fn test_every_broken_field_is_reported() {
    let def = MovementTuningDef {
        max_speed: -1.0,
        jump_take_off_speed: 0.0,
        jump_modifier: -2.0,
        jump_deceleration: 2.0,
        gravity: -9.0,
    };

    assert_eq!(validate_tuning(&def).len(), 5);
}
