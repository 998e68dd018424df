//! # Targeting Raycast Module
//!
//! This module casts the aim ray: from the camera's eye point along its view
//! direction, cell by cell through the world grid, stopping at the first
//! targetable block. The result is the world-space point where the ray meets
//! that block's surface together with the face's outward normal — everything
//! the placement engine and highlight presenter need.
//!
//! The walk is a standard grid traversal: track, per axis, the ray distance
//! to the next cell boundary, and repeatedly step across whichever boundary
//! comes first. Each step crosses exactly one face, so the entry face (and
//! with it the hit normal) falls out of the axis that was stepped.

use cgmath::{Point3, Vector3};

use crate::engine_state::camera_state::camera::Camera;
use crate::engine_state::voxels::block::block_side::BlockSide;
use crate::engine_state::voxels::world::World;

/// The result of a successful targeting raycast.
///
/// `position` is the world-space point where the ray meets the surface of
/// the hit block; `normal` is the outward unit normal of the face it entered
/// through. In a cubic-voxel world every component of the normal is one of
/// {-1, 0, 1}.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// World-space point where the aim ray meets the hit block's surface.
    pub position: Point3<f32>,
    /// Outward unit normal of the hit face, axis-aligned.
    pub normal: Vector3<f32>,
}

/// Casts the aim ray from the camera into the world grid.
///
/// The ray starts at the camera's position and travels along its view
/// direction for at most `max_distance` world units. The cell the camera
/// itself occupies is skipped — a ray that starts inside a block has no
/// entry face to report. The first cell with a targetable block ends the
/// walk; water counts as a surface here even though it never blocks
/// movement.
///
/// Deterministic function of the camera pose and world contents at call
/// time; holds no state and performs no writes.
///
/// # Arguments
/// * `camera` - The camera whose position and view direction define the ray
/// * `world` - The world grid to traverse
/// * `max_distance` - Reach limit in world units
///
/// # Returns
/// The `Intersection` for the first targetable block within reach, or
/// `None` when the ray hits nothing — aiming at open space is the normal
/// case, not an error.
pub fn calculate_intersection(
    camera: &Camera,
    world: &World,
    max_distance: f32,
) -> Option<Intersection> {
    let origin = camera.position;
    let direction = camera.get_view_vec();

    let mut cell = [
        origin.x.floor() as i32,
        origin.y.floor() as i32,
        origin.z.floor() as i32,
    ];

    let mut step = [0i32; 3];
    let mut t_delta = [f32::INFINITY; 3];
    let mut t_max = [f32::INFINITY; 3];

    for axis in 0..3 {
        let dir = [direction.x, direction.y, direction.z][axis];
        let pos = [origin.x, origin.y, origin.z][axis];
        if dir > 0.0 {
            step[axis] = 1;
            t_delta[axis] = 1.0 / dir;
            t_max[axis] = ((cell[axis] + 1) as f32 - pos) / dir;
        } else if dir < 0.0 {
            step[axis] = -1;
            t_delta[axis] = -1.0 / dir;
            t_max[axis] = (pos - cell[axis] as f32) / -dir;
        }
    }

    loop {
        // Step across whichever cell boundary the ray reaches first
        let axis = if t_max[0] <= t_max[1] && t_max[0] <= t_max[2] {
            0
        } else if t_max[1] <= t_max[2] {
            1
        } else {
            2
        };

        let t_hit = t_max[axis];
        if t_hit > max_distance {
            return None;
        }

        cell[axis] += step[axis];
        t_max[axis] += t_delta[axis];

        let occupant = world.get_voxel(
            cell[0] as f32 + 0.5,
            cell[1] as f32 + 0.5,
            cell[2] as f32 + 0.5,
        );
        if let Some(block_type) = occupant {
            if block_type.is_targetable() {
                let position = origin + direction * t_hit;
                let normal = BlockSide::from_entry_step(axis, step[axis]).normal();
                return Some(Intersection { position, normal });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::block::block_type::BlockType;
    use cgmath::Rad;
    use std::f32::consts::FRAC_PI_2;

    const REACH: f32 = 5.0;

    #[test]
    fn empty_world_returns_no_intersection() {
        let world = World::new();
        let camera = Camera::new(Point3::new(0.5, 0.5, 0.5), Rad(0.0), Rad(0.0));
        assert_eq!(calculate_intersection(&camera, &world, REACH), None);
    }

    #[test]
    fn horizontal_ray_hits_the_facing_side() {
        let mut world = World::new();
        world.set_voxel(3.5, 0.5, 0.5, BlockType::STONE);

        // Yaw 0 looks along positive X
        let camera = Camera::new(Point3::new(0.5, 0.5, 0.5), Rad(0.0), Rad(0.0));
        let hit = calculate_intersection(&camera, &world, REACH).expect("block within reach");

        assert!((hit.position.x - 3.0).abs() < 1e-4);
        assert!((hit.position.y - 0.5).abs() < 1e-4);
        assert_eq!(hit.normal, Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn downward_ray_reports_the_top_face() {
        let mut world = World::new();
        world.set_voxel(0.5, 0.5, 0.5, BlockType::STONE);

        let camera = Camera::new(Point3::new(0.5, 2.0, 0.5), Rad(0.0), Rad(-FRAC_PI_2));
        let hit = calculate_intersection(&camera, &world, REACH).expect("block below camera");

        assert!((hit.position.y - 1.0).abs() < 1e-4);
        assert_eq!(hit.normal, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn water_stops_the_ray() {
        let mut world = World::new();
        world.set_voxel(3.5, 0.5, 0.5, BlockType::WATER);

        let camera = Camera::new(Point3::new(0.5, 0.5, 0.5), Rad(0.0), Rad(0.0));
        let hit = calculate_intersection(&camera, &world, REACH);
        assert!(hit.is_some(), "water presents a surface to the aim ray");
    }

    #[test]
    fn blocks_beyond_reach_are_ignored() {
        let mut world = World::new();
        world.set_voxel(9.5, 0.5, 0.5, BlockType::STONE);

        let camera = Camera::new(Point3::new(0.5, 0.5, 0.5), Rad(0.0), Rad(0.0));
        assert_eq!(calculate_intersection(&camera, &world, REACH), None);
    }

    #[test]
    fn nearest_block_wins() {
        let mut world = World::new();
        world.set_voxel(2.5, 0.5, 0.5, BlockType::DIRT);
        world.set_voxel(3.5, 0.5, 0.5, BlockType::STONE);

        let camera = Camera::new(Point3::new(0.5, 0.5, 0.5), Rad(0.0), Rad(0.0));
        let hit = calculate_intersection(&camera, &world, REACH).expect("front block in reach");
        assert!((hit.position.x - 2.0).abs() < 1e-4);
    }

    #[test]
    fn ray_result_tracks_world_edits() {
        let mut world = World::new();
        world.set_voxel(2.5, 0.5, 0.5, BlockType::DIRT);

        let camera = Camera::new(Point3::new(0.5, 0.5, 0.5), Rad(0.0), Rad(0.0));
        assert!(calculate_intersection(&camera, &world, REACH).is_some());

        world.set_voxel(2.5, 0.5, 0.5, BlockType::AIR);
        assert_eq!(calculate_intersection(&camera, &world, REACH), None);
    }
}
