//! Movement domain: jump lifecycle messages published by the event drain.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when the player leaves the ground at the start of a jump
#[derive(Debug)]
pub struct JumpedEvent {
    pub actor: Entity,
}

impl Message for JumpedEvent {}

/// Fired when the jump button is released before the apex
#[derive(Debug)]
pub struct JumpStoppedEvent {
    pub actor: Entity,
}

impl Message for JumpStoppedEvent {}

/// Fired when the player lands after being airborne
#[derive(Debug)]
pub struct LandedEvent {
    pub actor: Entity,
}

impl Message for LandedEvent {}
