//! # Placement Engine Module
//!
//! This module turns a targeting intersection into a single world edit:
//! writing one cell with a chosen block type, or clearing one cell by
//! writing air. The hit point is nudged half a unit along the face normal —
//! outward when placing, inward when removing — so the same intersection
//! disambiguates "the cell just outside the hit face" from "the cell that
//! was hit" without a second raycast.
//!
//! A placement that would land inside the player's own body is skipped: the
//! destination cell is compared against the floored cell of every bounding
//! box corner, and an exact match rejects the edit. Nothing in this module
//! raises errors; a rejected or untargeted edit simply leaves the world
//! unchanged.

use cgmath::Point3;

use crate::engine_state::interaction::raycast::Intersection;
use crate::engine_state::player_state::bounding_box::BoundingBox;
use crate::engine_state::voxels::block::block_type::BlockType;
use crate::engine_state::voxels::block::BLOCK_TYPE_DISPLAY_NAMES;
use crate::engine_state::voxels::world::World;

/// What a placement request did to the world.
///
/// The world-level contract stays silent — a request that writes nothing is
/// not an error — but the outcome lets the engine log why, and lets tests
/// assert on the reason directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The cell was written.
    Written(Point3<i32>),
    /// Nothing was targeted; no cell was written.
    NoTarget,
    /// The destination cell coincides with the player's body; skipped.
    InsidePlayer,
}

/// Executes a placement or removal against the world grid.
///
/// Passing a concrete block type places it in the cell adjacent to the hit
/// face; passing `AIR` removes the hit block itself. The destination cell is
/// `floor(position + normal * sign)` per axis, with `sign = +0.5` when
/// placing and `-0.5` when removing.
///
/// The self-overlap guard compares the destination cell against the floored
/// cell of each bounding box corner, all three axes at once; an exact match
/// rejects the edit. The comparison is deliberately cell-equality rather
/// than box-overlap math — cheap, and sufficient given the half-unit
/// adjustment keeps the sample point well inside the destination cell.
///
/// # Arguments
/// * `world` - The world grid to write
/// * `intersection` - The current targeting result, if anything is targeted
/// * `bounding_box` - The player's volume at its current transform
/// * `block_type` - The type to write; `AIR` removes
///
/// # Returns
/// A `PlacementOutcome` describing whether the cell was written and, if
/// not, why the request was a no-op.
pub fn place_voxel(
    world: &mut World,
    intersection: Option<Intersection>,
    bounding_box: &BoundingBox,
    block_type: BlockType,
) -> PlacementOutcome {
    let Some(intersection) = intersection else {
        return PlacementOutcome::NoTarget;
    };

    // Nudge the sample point to the cell center side of the hit face:
    // outward for placement, inward for removal
    let sign = if block_type == BlockType::AIR {
        -0.5
    } else {
        0.5
    };
    let sample = intersection.position + intersection.normal * sign;

    let destination = Point3::new(
        sample.x.floor() as i32,
        sample.y.floor() as i32,
        sample.z.floor() as i32,
    );

    // Reject an edit landing in any cell the player's body occupies
    for corner in bounding_box.corners() {
        let corner_cell = Point3::new(
            corner.x.floor() as i32,
            corner.y.floor() as i32,
            corner.z.floor() as i32,
        );
        if corner_cell == destination {
            log::debug!(
                "skipped placing {} at ({}, {}, {}): inside player volume",
                BLOCK_TYPE_DISPLAY_NAMES[block_type as usize],
                destination.x,
                destination.y,
                destination.z,
            );
            return PlacementOutcome::InsidePlayer;
        }
    }

    world.set_voxel(sample.x, sample.y, sample.z, block_type);
    PlacementOutcome::Written(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn hit(position: Point3<f32>, normal: Vector3<f32>) -> Option<Intersection> {
        Some(Intersection { position, normal })
    }

    /// A bounding box far away from every cell the tests write.
    fn distant_player() -> BoundingBox {
        BoundingBox::from_camera_position(Point3::new(50.0, 50.0, 50.0))
    }

    #[test]
    fn no_target_writes_nothing() {
        let mut world = World::new();
        let outcome = place_voxel(&mut world, None, &distant_player(), BlockType::STONE);
        assert_eq!(outcome, PlacementOutcome::NoTarget);
        assert!(world.chunks.is_empty());
    }

    #[test]
    fn placing_lands_one_cell_outside_the_hit_face() {
        let mut world = World::new();
        world.set_voxel(0.5, 0.5, 0.5, BlockType::DIRT);

        // Aiming straight down at the top face of cell (0, 0, 0)
        let outcome = place_voxel(
            &mut world,
            hit(Point3::new(0.3, 1.0, 0.3), Vector3::new(0.0, 1.0, 0.0)),
            &distant_player(),
            BlockType::STONE,
        );

        assert_eq!(outcome, PlacementOutcome::Written(Point3::new(0, 1, 0)));
        assert_eq!(world.get_voxel(0.3, 1.5, 0.3), Some(BlockType::STONE));
        // The hit cell itself is untouched
        assert_eq!(world.get_voxel(0.5, 0.5, 0.5), Some(BlockType::DIRT));
    }

    #[test]
    fn removal_clears_the_hit_cell_itself() {
        let mut world = World::new();
        world.set_voxel(0.5, 0.5, 0.5, BlockType::DIRT);

        let outcome = place_voxel(
            &mut world,
            hit(Point3::new(0.3, 1.0, 0.3), Vector3::new(0.0, 1.0, 0.0)),
            &distant_player(),
            BlockType::AIR,
        );

        assert_eq!(outcome, PlacementOutcome::Written(Point3::new(0, 0, 0)));
        assert_eq!(world.get_voxel(0.5, 0.5, 0.5), None);
    }

    #[test]
    fn removing_from_an_empty_cell_is_idempotent() {
        let mut world = World::new();
        let before = world.get_voxel(0.5, 0.5, 0.5);

        place_voxel(
            &mut world,
            hit(Point3::new(1.0, 0.4, 0.6), Vector3::new(1.0, 0.0, 0.0)),
            &distant_player(),
            BlockType::AIR,
        );

        assert_eq!(world.get_voxel(0.5, 0.5, 0.5), before);
    }

    #[test]
    fn placement_into_the_player_is_rejected() {
        let mut world = World::new();
        // Player camera at (0, 2, 0): corner cells span x/z {-1, 0}, y {0, 2}
        let player = BoundingBox::from_camera_position(Point3::new(0.0, 2.0, 0.0));

        let outcome = place_voxel(
            &mut world,
            hit(Point3::new(0.5, 0.0, 0.5), Vector3::new(0.0, 1.0, 0.0)),
            &player,
            BlockType::STONE,
        );

        assert_eq!(outcome, PlacementOutcome::InsidePlayer);
        assert_eq!(world.get_voxel(0.5, 0.5, 0.5), None);
        assert!(world.chunks.is_empty(), "rejected placement must not write");
    }

    #[test]
    fn placement_beside_the_player_succeeds() {
        let mut world = World::new();
        world.set_voxel(0.5, 0.5, 0.5, BlockType::DIRT);
        // Same camera as the rejection test: destination (0, 1, 0) is not a
        // corner cell because the corner Y cells are 0 and 2
        let player = BoundingBox::from_camera_position(Point3::new(0.0, 2.0, 0.0));

        let outcome = place_voxel(
            &mut world,
            hit(Point3::new(0.3, 1.0, 0.3), Vector3::new(0.0, 1.0, 0.0)),
            &player,
            BlockType::STONE,
        );

        assert_eq!(outcome, PlacementOutcome::Written(Point3::new(0, 1, 0)));
        assert_eq!(world.get_voxel(0.5, 1.5, 0.5), Some(BlockType::STONE));
    }

    #[test]
    fn water_can_be_placed_like_any_block() {
        let mut world = World::new();
        world.set_voxel(0.5, 0.5, 0.5, BlockType::SAND);

        let outcome = place_voxel(
            &mut world,
            hit(Point3::new(0.3, 1.0, 0.3), Vector3::new(0.0, 1.0, 0.0)),
            &distant_player(),
            BlockType::WATER,
        );

        assert_eq!(outcome, PlacementOutcome::Written(Point3::new(0, 1, 0)));
        assert_eq!(world.get_voxel(0.5, 1.5, 0.5), Some(BlockType::WATER));
        assert!(!world.blocks_movement_at(0.5, 1.5, 0.5));
    }
}
