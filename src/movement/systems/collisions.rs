//! Movement domain: ground detection for the controller loop.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut GroundContact), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut contact) in &mut query {
        let was_on_ground = contact.on_ground;

        // Cast a short ray downward from the player's feet
        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);
        let ray_direction = Dir2::NEG_Y;
        let ray_distance = 4.0;

        let hit = spatial_query.cast_ray(
            ray_origin,
            ray_direction,
            ray_distance,
            true,
            &ground_filter,
        );

        contact.on_ground = hit.is_some();

        if contact.on_ground != was_on_ground {
            debug!("Ground contact changed: on_ground={}", contact.on_ground);
        }
    }
}
