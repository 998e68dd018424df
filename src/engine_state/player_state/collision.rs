//! # Collision Resolution Module
//!
//! This module keeps the player's bounding volume out of solid geometry.
//! Movement is resolved one axis at a time: each of the box's eight corners
//! is probed at its pre-movement position offset by that axis's delta alone,
//! and an axis whose probe lands in a movement-blocking cell loses its whole
//! delta. Axes are independent, so a player walking into a wall keeps
//! sliding along it on the unblocked axes.
//!
//! ## Known Limitation
//!
//! Corners are probed at current-position + per-axis delta, not swept along
//! the displacement, so a displacement larger than one cell in a single
//! frame can pass through a thin obstacle. Per-frame displacements in this
//! layer are fractions of a cell, which keeps the probe cheap and the miss
//! window out of reach of normal movement speeds.

use cgmath::Point3;

use crate::engine_state::player_state::bounding_box::BoundingBox;
use crate::engine_state::voxels::world::World;

/// Resolves a proposed camera movement against the world grid.
///
/// Computes the per-axis displacement from `current` to `proposed`, probes
/// every corner of the player's bounding volume (taken at its pre-movement
/// transform) against the grid one axis at a time, and cancels the full
/// delta on any axis whose probe hits a movement-blocking cell. Water and
/// empty cells never block. Axes that stay permitted keep their entire
/// proposed delta.
///
/// # Arguments
/// * `world` - The world grid to probe; queried fresh, never cached
/// * `current` - The camera position the player is moving from
/// * `proposed` - The camera position the player is asking to move to
///
/// # Returns
/// The resolved camera position: equal to `proposed` on permitted axes and
/// to `current` on blocked ones.
pub fn resolve_movement(
    world: &World,
    current: Point3<f32>,
    proposed: Point3<f32>,
) -> Point3<f32> {
    let dx = proposed.x - current.x;
    let dy = proposed.y - current.y;
    let dz = proposed.z - current.z;

    let mut can_move_x = true;
    let mut can_move_y = true;
    let mut can_move_z = true;

    // Check each corner of the player's bounding volume and see if the
    // player's new position on each axis is blocked by a voxel
    let bounding_box = BoundingBox::from_camera_position(current);
    for corner in bounding_box.corners() {
        if can_move_x && world.blocks_movement_at(corner.x + dx, corner.y, corner.z) {
            can_move_x = false;
        }
        if can_move_y && world.blocks_movement_at(corner.x, corner.y + dy, corner.z) {
            can_move_y = false;
        }
        if can_move_z && world.blocks_movement_at(corner.x, corner.y, corner.z + dz) {
            can_move_z = false;
        }
    }

    let mut resolved = proposed;
    if !can_move_x {
        resolved.x -= dx;
    }
    if !can_move_y {
        resolved.y -= dy;
    }
    if !can_move_z {
        resolved.z -= dz;
    }

    if !can_move_x || !can_move_y || !can_move_z {
        log::trace!(
            "movement clamped (x: {}, y: {}, z: {})",
            can_move_x,
            can_move_y,
            can_move_z,
        );
    }

    resolved
}
