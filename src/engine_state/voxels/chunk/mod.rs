//! # Chunk Module
//!
//! This module provides the `Chunk` struct and related functionality for
//! managing 16x16x16 blocks of voxel data. It includes chunk generation
//! algorithms and the per-cell access the interaction layer depends on.
//!
//! ## Storage Strategy
//!
//! Chunks keep two parallel views of their cells:
//! - `blocks`: a dense vector with one `Block` per cell, air included, so a
//!   cell can be read or written in O(1) — placement and removal rewrite
//!   single cells every frame.
//! - `blocking`: a bit vector (1 bit per cell) caching whether the cell's
//!   block type obstructs the player. Collision resolution probes up to
//!   eight corners per axis per frame, and those probes reduce to a single
//!   bit test without decoding the block type.
//!
//! The bit vector is maintained by `set_block_at`; the two views never
//! disagree.

use bitvec::prelude::BitVec;
use cgmath::Point3;
use noise::NoiseFn;
use noise::Perlin;

use super::block::block_type::BlockType;
use super::block::Block;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of blocks in a single 2D plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of blocks in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_SIZE: i32 = CHUNK_PLANE_SIZE * CHUNK_DIMENSION;

/// Threshold above which Perlin noise is considered solid for terrain generation.
pub const PERLIN_POSITIVE_THRESHOLD: f64 = 0.2;
/// Threshold below which Perlin noise is considered empty for terrain generation.
pub const PERLIN_NEGATIVE_THRESHOLD: f64 = -0.2;
/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;

/// Represents a 16x16x16 collection of voxel blocks in the world.
///
/// Chunks are the fundamental unit of world data. Each chunk maintains its
/// position in chunk coordinates and a dense array of its cells, plus a
/// bit-vector mirror of which cells obstruct the player.
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: Point3<i32>,

    /// The block data for this chunk, one entry per cell including air.
    ///
    /// Cells are stored in row-major order: x, then y, then z. The cell at
    /// chunk-relative `(cx, cy, cz)` lives at index
    /// `cx + CHUNK_DIMENSION * cy + CHUNK_PLANE_SIZE * cz`.
    blocks: Vec<Block>,

    /// A bit vector where each bit caches whether the corresponding cell
    /// obstructs the player's movement.
    ///
    /// Indexed identically to `blocks`. Air and water cells are 0; every
    /// other type is 1. This provides O(1) movement probes without decoding
    /// the cell's block type.
    blocking: BitVec,
}

impl Chunk {
    /// Creates a chunk by evaluating a generator function at every cell.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    /// * `generator` - Function from chunk-relative `(cx, cy, cz)` to the
    ///   block type for that cell
    ///
    /// # Returns
    /// A new `Chunk` with both storage views populated consistently.
    fn generate<F>(position: &Point3<i32>, mut generator: F) -> Self
    where
        F: FnMut(i32, i32, i32) -> BlockType,
    {
        let mut blocks = Vec::with_capacity(CHUNK_SIZE as usize);
        let mut blocking = BitVec::with_capacity(CHUNK_SIZE as usize);

        for cz in 0..CHUNK_DIMENSION {
            for cy in 0..CHUNK_DIMENSION {
                for cx in 0..CHUNK_DIMENSION {
                    let block_type = generator(cx, cy, cz);
                    blocks.push(Block::new(block_type));
                    blocking.push(block_type.blocks_movement());
                }
            }
        }

        Chunk {
            position: *position,
            blocks,
            blocking,
        }
    }

    /// Creates a new, completely empty chunk (all blocks are air).
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    ///
    /// # Returns
    /// A new `Chunk` instance filled with air blocks.
    pub fn empty(position: &Point3<i32>) -> Self {
        Self::generate(position, |_, _, _| BlockType::AIR)
    }

    /// Creates a new chunk filled with solid blocks (for testing).
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    ///
    /// # Returns
    /// A new `Chunk` completely filled with dirt.
    #[allow(dead_code)]
    pub fn solid(position: &Point3<i32>) -> Self {
        Self::generate(position, |_, _, _| BlockType::DIRT)
    }

    /// Creates a new chunk with random blocks (for testing purposes).
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    ///
    /// # Returns
    /// A new `Chunk` with randomly placed blocks.
    #[allow(dead_code)]
    pub fn random(position: &Point3<i32>) -> Self {
        let sparseness = 0.9;
        Self::generate(position, |_, _, _| {
            if fastrand::f64() < sparseness {
                BlockType::AIR
            } else {
                BlockType::get_random_type()
            }
        })
    }

    /// Generates a chunk containing its slice of a flat world.
    ///
    /// Every cell below `ground_height` (in world block coordinates) is
    /// stone, the layer directly at the surface is grass, and everything
    /// above is air. Chunks entirely above the surface come out empty;
    /// chunks entirely below come out solid stone.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates where the chunk will be placed
    /// * `ground_height` - World Y coordinate of the first air layer
    ///
    /// # Returns
    /// A new `Chunk` holding its portion of the flat terrain.
    pub fn flat(position: &Point3<i32>, ground_height: i32) -> Self {
        let base_y = position.y * CHUNK_DIMENSION;
        Self::generate(position, |_, cy, _| {
            let world_y = base_y + cy;
            if world_y < ground_height - 1 {
                BlockType::STONE
            } else if world_y < ground_height {
                BlockType::GRASS
            } else {
                BlockType::AIR
            }
        })
    }

    /// Generates a chunk using Perlin noise for natural-looking terrain.
    ///
    /// The terrain is generated by sampling 3D Perlin noise and applying
    /// thresholds to determine which blocks are solid. The result resembles
    /// natural terrain with caves and overhangs.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates where the chunk will be placed
    ///
    /// # Returns
    /// A new `Chunk` with terrain generated using Perlin noise.
    #[allow(dead_code)]
    pub fn perlin(position: &Point3<i32>) -> Self {
        let perlin = Perlin::new(0);
        Self::generate(position, |cx, cy, cz| {
            let bposition = Point3::<i32>::new(
                cx + CHUNK_DIMENSION * position.x,
                cy + CHUNK_DIMENSION * position.y,
                cz + CHUNK_DIMENSION * position.z,
            );
            let perlin_sample = perlin.get(Self::to_perlin_pos(bposition, PERLIN_SCALE_FACTOR));
            if !(PERLIN_NEGATIVE_THRESHOLD..=PERLIN_POSITIVE_THRESHOLD).contains(&perlin_sample) {
                BlockType::get_random_type()
            } else {
                BlockType::AIR
            }
        })
    }

    /// Converts chunk-relative block coordinates to world-space coordinates
    /// for Perlin noise sampling.
    ///
    /// # Arguments
    /// * `pos` - The block position within the chunk
    /// * `scale_factor` - Scaling factor to apply to the world coordinates
    ///
    /// # Returns
    /// An array of [x, y, z] coordinates scaled for Perlin noise sampling.
    fn to_perlin_pos(pos: Point3<i32>, scale_factor: f64) -> [f64; 3] {
        [
            (pos.x as f64 * scale_factor),
            (pos.y as f64 * scale_factor),
            (pos.z as f64 * scale_factor),
        ]
    }

    /// Computes the storage index of a chunk-relative cell.
    fn cell_index(cx: i32, cy: i32, cz: i32) -> usize {
        (cx + CHUNK_DIMENSION * cy + CHUNK_PLANE_SIZE * cz) as usize
    }

    /// Gets the block type at the specified chunk-relative coordinates.
    ///
    /// # Arguments
    /// * `cx` - X coordinate within the chunk (0..CHUNK_DIMENSION)
    /// * `cy` - Y coordinate within the chunk (0..CHUNK_DIMENSION)
    /// * `cz` - Z coordinate within the chunk (0..CHUNK_DIMENSION)
    ///
    /// # Returns
    /// The `BlockType` stored at the specified coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn get_block_at(&self, cx: i32, cy: i32, cz: i32) -> BlockType {
        self.blocks[Self::cell_index(cx, cy, cz)].get_block_type()
    }

    /// Writes the block type at the specified chunk-relative coordinates.
    ///
    /// Both storage views are updated together so the blocking bit always
    /// matches the stored type. Rewriting a cell with the type it already
    /// holds leaves the chunk observably unchanged.
    ///
    /// # Arguments
    /// * `cx` - X coordinate within the chunk
    /// * `cy` - Y coordinate within the chunk
    /// * `cz` - Z coordinate within the chunk
    /// * `block_type` - The new type for the cell
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn set_block_at(&mut self, cx: i32, cy: i32, cz: i32, block_type: BlockType) {
        let index = Self::cell_index(cx, cy, cz);
        self.blocks[index] = Block::new(block_type);
        self.blocking.set(index, block_type.blocks_movement());
    }

    /// Checks if the cell at the specified chunk-relative coordinates
    /// obstructs the player's movement.
    ///
    /// This is the fast path used by collision probes: a single bit test,
    /// with no block type decoding. Air and water cells report `false`.
    ///
    /// # Arguments
    /// * `cx` - X coordinate within the chunk
    /// * `cy` - Y coordinate within the chunk
    /// * `cz` - Z coordinate within the chunk
    ///
    /// # Returns
    /// `true` if the cell blocks movement.
    pub fn is_cell_blocking(&self, cx: i32, cy: i32, cz: i32) -> bool {
        self.blocking[Self::cell_index(cx, cy, cz)]
    }
}
