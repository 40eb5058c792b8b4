//! Scheduler domain: deferred gameplay events.
//!
//! Transitions decide that something happened; the consequences run later.
//! Events queued during a tick execute after that tick's velocity has been
//! committed, FIFO. An executing event may queue further events; those stay
//! behind for the next drain pass instead of running recursively.

#[cfg(test)]
mod tests;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{JumpStoppedEvent, JumpedEvent, LandedEvent, MovementSet};

/// The schedulable event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledKind {
    /// The actor left the ground at the start of a jump.
    Jumped,
    /// The actor released the jump button early.
    StopJump,
    /// The actor landed after being airborne.
    Landed,
}

/// A deferred command: which actor it concerns and what happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledEvent {
    pub actor: Entity,
    pub kind: ScheduledKind,
}

/// FIFO queue of deferred events. One instance serves the whole simulation;
/// the controller loop queues into it and the drain system empties it once
/// per tick. Tearing a level down calls [`EventScheduler::clear`], which
/// discards pending events without executing them.
#[derive(Resource, Debug, Default)]
pub struct EventScheduler {
    queue: Vec<ScheduledEvent>,
}

impl EventScheduler {
    /// Queue an event for the next drain pass. Returns a handle to the
    /// queued entry so the caller can adjust the payload before it runs.
    pub fn schedule(&mut self, event: ScheduledEvent) -> &mut ScheduledEvent {
        self.queue.push(event);
        let last = self.queue.len() - 1;
        &mut self.queue[last]
    }

    /// Remove and return everything queued so far. Events scheduled while
    /// the returned batch is executing land in the next batch.
    pub fn take_batch(&mut self) -> Vec<ScheduledEvent> {
        std::mem::take(&mut self.queue)
    }

    /// Discard all pending events without executing them.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Executes the tick's batch in the order it was scheduled. Execution here
/// means publication: each kind goes out as a message for whoever listens
/// (audio, animation, scoring). A kind nobody listens to is still published,
/// never an error.
pub(crate) fn drain_scheduler(
    mut scheduler: ResMut<EventScheduler>,
    mut jumped: MessageWriter<JumpedEvent>,
    mut stopped: MessageWriter<JumpStoppedEvent>,
    mut landed: MessageWriter<LandedEvent>,
) {
    for event in scheduler.take_batch() {
        match event.kind {
            ScheduledKind::Jumped => {
                debug!("Jumped: actor={:?}", event.actor);
                jumped.write(JumpedEvent { actor: event.actor });
            }
            ScheduledKind::StopJump => {
                stopped.write(JumpStoppedEvent { actor: event.actor });
            }
            ScheduledKind::Landed => {
                debug!("Landed: actor={:?}", event.actor);
                landed.write(LandedEvent { actor: event.actor });
            }
        }
    }
}

pub struct SchedulerPlugin;

impl Plugin for SchedulerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EventScheduler>()
            .add_message::<JumpedEvent>()
            .add_message::<JumpStoppedEvent>()
            .add_message::<LandedEvent>()
            .add_systems(Update, drain_scheduler.in_set(MovementSet::Effects));
    }
}
