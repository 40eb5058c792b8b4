//! Movement domain: the pure jump-phase transition function.
//!
//! One call per tick. No hidden state: input, physics feedback, and tuning
//! come in as arguments, and side effects come back out as scheduled event
//! kinds instead of being performed in-line.

use bevy::prelude::*;

use crate::movement::{JumpPhase, MovementState, MovementTuning};
use crate::scheduler::ScheduledKind;

/// One tick's worth of sampled input. Passed in rather than polled so the
/// transition stays callable without a windowed app.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal axis in [-1, 1].
    pub horizontal_axis: f32,
    /// Edge-triggered: true only on the tick the jump button went down.
    pub jump_pressed: bool,
    /// Edge-triggered: true only on the tick the jump button was released.
    pub jump_released: bool,
}

/// Result of one transition: the replacement state plus the event kinds to
/// hand to the scheduler, in the order they were decided.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    pub state: MovementState,
    pub events: Vec<ScheduledKind>,
}

/// Advance the jump state machine by one tick.
///
/// The decision list is ordered and the first matching rule wins. The
/// release check sits above the phase-specific rules: a release observed on
/// the same tick as a phase match (`PrepareToJump` included) requests the
/// stop first.
pub fn step(
    prev: MovementState,
    input: TickInput,
    grounded: bool,
    current_vy: f32,
    control_enabled: bool,
    tuning: &MovementTuning,
) -> StepOutput {
    if !control_enabled {
        // Vertical velocity holds, no steering, no phase movement.
        return StepOutput {
            state: prev.with_velocity(Vec2::new(0.0, current_vy)),
            events: Vec::new(),
        };
    }

    let mut events = Vec::new();

    let decided = if prev.phase == JumpPhase::Grounded && input.jump_pressed {
        prev.with_phase(JumpPhase::PrepareToJump)
    } else if input.jump_released {
        events.push(ScheduledKind::StopJump);
        prev.with_stop_requested(true)
    } else if prev.phase == JumpPhase::PrepareToJump {
        prev.with_phase(JumpPhase::Jumping).with_jump_requested(true)
    } else if prev.phase == JumpPhase::Jumping && !grounded {
        events.push(ScheduledKind::Jumped);
        prev.with_phase(JumpPhase::InFlight)
    } else if prev.phase == JumpPhase::InFlight && grounded {
        events.push(ScheduledKind::Landed);
        prev.with_phase(JumpPhase::Landed)
    } else if prev.phase == JumpPhase::Landed {
        // One-tick pass-through, never stable across two steps.
        prev.with_phase(JumpPhase::Grounded)
    } else {
        prev
    };

    // Vertical resolution. Consumes both request flags within the tick that
    // raised them.
    let vy = if decided.jump_requested && grounded {
        tuning.takeoff_velocity()
    } else if decided.stop_requested {
        // Ascent is judged on the velocity stored before this tick; the
        // damping applies to the live physics velocity.
        let factor = if prev.velocity.y > 0.0 {
            tuning.jump_deceleration
        } else {
            1.0
        };
        current_vy * factor
    } else {
        current_vy
    };

    let state = decided
        .with_jump_requested(false)
        .with_stop_requested(false)
        .with_velocity(Vec2::new(input.horizontal_axis, vy));

    StepOutput { state, events }
}
