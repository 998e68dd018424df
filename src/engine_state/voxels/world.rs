//! # World Module
//!
//! This module provides the `World` struct: the sparse grid of unit cells
//! that is the sole source of truth for occupied space. Collision probes,
//! targeting rays, and placements all read and write through it; nothing
//! else in the crate caches occupancy across frames.
//!
//! ## Architecture
//!
//! The world is a sparse map from chunk coordinates to 16x16x16 chunks.
//! Only chunks that have been generated or written exist in memory, which
//! makes the grid effectively unbounded: a query into an absent chunk
//! simply reads back as empty space.
//!
//! ## Coordinate Handling
//!
//! The public query surface takes world-space `f32` coordinates and resolves
//! them to the containing cell internally (floor per axis, then euclidean
//! split into chunk and chunk-relative coordinates). Callers probing corner
//! positions or ray sample points never deal with cell math themselves.

use cgmath::Point3;
use std::collections::HashMap;

use crate::engine_state::voxels::block::block_type::BlockType;
use crate::engine_state::voxels::block::BLOCK_TYPE_DISPLAY_NAMES;
use crate::engine_state::voxels::chunk::{Chunk, CHUNK_DIMENSION};

/// The method used to generate new chunks added through `add_chunk_at`.
///
/// Possible values:
/// - "flat": A stone slab with a grass surface at `FLAT_GROUND_HEIGHT`
/// - "perlin": Uses Perlin noise for natural terrain generation
/// - "random": Sparse random blocks
/// - "solid": Generates completely solid chunks
/// - "empty": Generates completely empty chunks
const CHUNK_GENERATION_METHOD: &str = "flat";

/// World Y coordinate of the first air layer in flat-generated terrain.
const FLAT_GROUND_HEIGHT: i32 = 4;

/// Represents a voxel world composed of multiple chunks.
///
/// The world is stored as a sparse 3D grid of chunks, where each chunk is a
/// 16x16x16 collection of blocks. Cells in chunks that were never generated
/// read back as empty.
///
/// # Examples
///
/// ```
/// use voxel_interaction::engine_state::voxels::block::block_type::BlockType;
/// use voxel_interaction::engine_state::voxels::world::World;
///
/// let mut world = World::new();
///
/// // Write one cell and read it back through the same containing-cell math
/// world.set_voxel(0.3, 1.9, -0.2, BlockType::DIRT);
/// assert_eq!(world.get_voxel(0.9, 1.0, -0.9), Some(BlockType::DIRT));
/// ```
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    pub chunks: HashMap<Point3<i32>, Chunk>,
}

impl World {
    /// Creates a new, empty world.
    ///
    /// # Returns
    ///
    /// A new `World` instance with no chunks loaded.
    pub fn new() -> Self {
        World {
            chunks: HashMap::new(),
        }
    }

    /// Adds a new chunk at the specified chunk coordinates if one doesn't
    /// already exist.
    ///
    /// The chunk is generated using the currently configured generation
    /// method. If a chunk already exists at the specified position, this
    /// method does nothing.
    ///
    /// # Arguments
    ///
    /// * `position` - The chunk coordinates where the new chunk should be added
    pub fn add_chunk_at(&mut self, position: Point3<i32>) {
        if self.chunks.contains_key(&position) {
            return;
        }

        let chunk = match CHUNK_GENERATION_METHOD {
            "flat" => Chunk::flat(&position, FLAT_GROUND_HEIGHT),
            "perlin" => Chunk::perlin(&position),
            "random" => Chunk::random(&position),
            "solid" => Chunk::solid(&position),
            "empty" => Chunk::empty(&position),
            _ => Chunk::empty(&position),
        };

        self.chunks.insert(position, chunk);
    }

    /// Splits a world-space position into its containing cell's chunk
    /// coordinates and chunk-relative coordinates.
    ///
    /// The position is floored per axis to the cell it falls in, then the
    /// cell is split euclidean-style so negative coordinates land in the
    /// correct chunk (cell -1 belongs to chunk -1, local 15).
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - World-space coordinates
    ///
    /// # Returns
    /// `(chunk_position, (cx, cy, cz))` for the containing cell.
    fn split_position(x: f32, y: f32, z: f32) -> (Point3<i32>, (i32, i32, i32)) {
        let cell_x = x.floor() as i32;
        let cell_y = y.floor() as i32;
        let cell_z = z.floor() as i32;

        let chunk_position = Point3::new(
            cell_x.div_euclid(CHUNK_DIMENSION),
            cell_y.div_euclid(CHUNK_DIMENSION),
            cell_z.div_euclid(CHUNK_DIMENSION),
        );
        let local = (
            cell_x.rem_euclid(CHUNK_DIMENSION),
            cell_y.rem_euclid(CHUNK_DIMENSION),
            cell_z.rem_euclid(CHUNK_DIMENSION),
        );
        (chunk_position, local)
    }

    /// Reads the block type of the cell containing a world-space position.
    ///
    /// This is a pure read with no side effects; it never creates chunks.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - World-space coordinates of the point to query
    ///
    /// # Returns
    /// `Some(block_type)` for an occupied cell, or `None` when the cell is
    /// air or lies in an unpopulated region. Absence of a voxel is the
    /// common case, not an error.
    pub fn get_voxel(&self, x: f32, y: f32, z: f32) -> Option<BlockType> {
        let (chunk_position, (cx, cy, cz)) = Self::split_position(x, y, z);
        let chunk = self.chunks.get(&chunk_position)?;
        match chunk.get_block_at(cx, cy, cz) {
            BlockType::AIR => None,
            block_type => Some(block_type),
        }
    }

    /// Checks whether the cell containing a world-space position obstructs
    /// the player's movement.
    ///
    /// Equivalent to `get_voxel(..).map_or(false, |t| t.blocks_movement())`
    /// but routed through the chunk's blocking bit vector, so a probe is a
    /// single bit test. Empty space and water both report `false`.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - World-space coordinates of the point to probe
    ///
    /// # Returns
    /// `true` if the containing cell blocks movement.
    pub fn blocks_movement_at(&self, x: f32, y: f32, z: f32) -> bool {
        let (chunk_position, (cx, cy, cz)) = Self::split_position(x, y, z);
        match self.chunks.get(&chunk_position) {
            Some(chunk) => chunk.is_cell_blocking(cx, cy, cz),
            None => false,
        }
    }

    /// Writes exactly one cell: the cell containing the world-space position.
    ///
    /// Writing `AIR` clears the cell. The destination chunk is created empty
    /// on demand, so writes into unpopulated regions behave the same as
    /// writes into generated terrain. Re-setting a cell to the type it
    /// already holds is observably a no-op.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - World-space coordinates of the point to write
    /// * `block_type` - The new type for the containing cell
    pub fn set_voxel(&mut self, x: f32, y: f32, z: f32, block_type: BlockType) {
        let (chunk_position, (cx, cy, cz)) = Self::split_position(x, y, z);
        let chunk = self
            .chunks
            .entry(chunk_position)
            .or_insert_with(|| Chunk::empty(&chunk_position));
        chunk.set_block_at(cx, cy, cz, block_type);

        log::debug!(
            "set cell ({}, {}, {}) in chunk ({}, {}, {}) to {}",
            cx,
            cy,
            cz,
            chunk_position.x,
            chunk_position.y,
            chunk_position.z,
            BLOCK_TYPE_DISPLAY_NAMES[block_type as usize],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_in_the_same_cell_read_the_same_voxel() {
        let mut world = World::new();
        world.set_voxel(0.3, 1.9, 0.1, BlockType::DIRT);
        assert_eq!(world.get_voxel(0.9, 1.0, 0.999), Some(BlockType::DIRT));
        assert_eq!(world.get_voxel(0.0, 1.5, 0.5), Some(BlockType::DIRT));
        // Neighboring cells stay empty
        assert_eq!(world.get_voxel(1.1, 1.5, 0.5), None);
        assert_eq!(world.get_voxel(0.5, 2.1, 0.5), None);
    }

    #[test]
    fn negative_coordinates_resolve_to_their_own_cells() {
        let mut world = World::new();
        world.set_voxel(-0.5, 0.5, -0.5, BlockType::STONE);
        assert_eq!(world.get_voxel(-0.01, 0.99, -0.99), Some(BlockType::STONE));
        // Cell (0, 0, 0) is a different cell than (-1, 0, -1)
        assert_eq!(world.get_voxel(0.01, 0.5, 0.01), None);
    }

    #[test]
    fn unpopulated_space_reads_empty() {
        let world = World::new();
        assert_eq!(world.get_voxel(1000.0, -1000.0, 0.0), None);
        assert!(!world.blocks_movement_at(1000.0, -1000.0, 0.0));
    }

    #[test]
    fn clearing_an_empty_cell_changes_nothing() {
        let mut world = World::new();
        assert_eq!(world.get_voxel(2.5, 2.5, 2.5), None);
        world.set_voxel(2.5, 2.5, 2.5, BlockType::AIR);
        assert_eq!(world.get_voxel(2.5, 2.5, 2.5), None);
    }

    #[test]
    fn water_occupies_but_does_not_block() {
        let mut world = World::new();
        world.set_voxel(3.5, 3.5, 3.5, BlockType::WATER);
        assert_eq!(world.get_voxel(3.5, 3.5, 3.5), Some(BlockType::WATER));
        assert!(!world.blocks_movement_at(3.5, 3.5, 3.5));
    }

    #[test]
    fn blocking_probe_matches_voxel_read() {
        let mut world = World::new();
        world.set_voxel(5.5, 5.5, 5.5, BlockType::WOOD);
        assert!(world.blocks_movement_at(5.9, 5.1, 5.4));
        world.set_voxel(5.5, 5.5, 5.5, BlockType::AIR);
        assert!(!world.blocks_movement_at(5.9, 5.1, 5.4));
    }

    #[test]
    fn flat_generation_is_walkable_above_ground() {
        let mut world = World::new();
        world.add_chunk_at(Point3::new(0, 0, 0));
        // Surface layer is grass, space above it is open
        assert_eq!(world.get_voxel(8.5, 3.5, 8.5), Some(BlockType::GRASS));
        assert_eq!(world.get_voxel(8.5, 4.5, 8.5), None);
        assert!(world.blocks_movement_at(8.5, 3.5, 8.5));
    }
}
