//! Scheduler domain: unit tests for the deferred-event queue.

use bevy::prelude::Entity;

use super::{EventScheduler, ScheduledEvent, ScheduledKind};

fn event(kind: ScheduledKind) -> ScheduledEvent {
    ScheduledEvent {
        actor: Entity::PLACEHOLDER,
        kind,
    }
}

#[test]
fn test_drain_is_fifo() {
    let mut scheduler = EventScheduler::default();
    scheduler.schedule(event(ScheduledKind::StopJump));
    scheduler.schedule(event(ScheduledKind::Jumped));
    scheduler.schedule(event(ScheduledKind::Landed));

    let kinds: Vec<_> = scheduler.take_batch().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ScheduledKind::StopJump,
            ScheduledKind::Jumped,
            ScheduledKind::Landed
        ]
    );
}

#[test]
fn test_batch_is_taken_exactly_once() {
    let mut scheduler = EventScheduler::default();
    scheduler.schedule(event(ScheduledKind::Jumped));

    assert_eq!(scheduler.take_batch().len(), 1);
    assert!(scheduler.is_empty());
    assert!(scheduler.take_batch().is_empty());
}

#[test]
fn test_scheduling_during_execution_defers_to_next_pass() {
    let mut scheduler = EventScheduler::default();
    scheduler.schedule(event(ScheduledKind::Jumped));

    let batch = scheduler.take_batch();
    for executing in &batch {
        // An executing event queues a follow-up; it must not join the
        // batch currently running.
        scheduler.schedule(ScheduledEvent {
            actor: executing.actor,
            kind: ScheduledKind::Landed,
        });
    }

    assert_eq!(batch.len(), 1);
    assert_eq!(scheduler.len(), 1);

    let next = scheduler.take_batch();
    assert_eq!(next[0].kind, ScheduledKind::Landed);
}

#[test]
fn test_clear_discards_pending_events() {
    let mut scheduler = EventScheduler::default();
    scheduler.schedule(event(ScheduledKind::Jumped));
    scheduler.schedule(event(ScheduledKind::Landed));

    scheduler.clear();
    assert!(scheduler.is_empty());
    assert!(scheduler.take_batch().is_empty());
}

#[test]
fn test_schedule_returns_a_payload_handle() {
    let mut scheduler = EventScheduler::default();

    let handle = scheduler.schedule(event(ScheduledKind::StopJump));
    handle.kind = ScheduledKind::Landed;

    assert_eq!(scheduler.take_batch()[0].kind, ScheduledKind::Landed);
}
