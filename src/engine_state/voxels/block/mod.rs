//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel
//! interaction layer. It includes block type definitions, block face handling,
//! and the compact block data structure chunks are built from.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
/// This is used for efficient storage of block data inside chunks.
pub type BlockTypeSize = u8;

/// Maps each block type to its human-readable display name.
///
/// The array is indexed by `BlockType` as a `usize`. These names are what the
/// session log and the hotbar report to the player; they are also the keys
/// accepted by `BlockType::from_name`.
pub static BLOCK_TYPE_DISPLAY_NAMES: [&str; 7] = [
    "air",   // AIR
    "dirt",  // DIRT
    "grass", // GRASS
    "stone", // STONE
    "wood",  // WOOD
    "sand",  // SAND
    "water", // WATER
];

/// Represents a single voxel block in the world.
///
/// This is a lightweight structure that stores only the essential block data.
/// The actual block properties are looked up from the block type.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute keeps the layout a single byte so a chunk's
/// cell array stays dense. The block type is stored as a compact
/// `BlockTypeSize`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// Creates a new block of the specified type.
    ///
    /// # Arguments
    /// * `block_type` - The type of block to create
    ///
    /// # Returns
    /// A new `Block` instance with the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Decodes this block's type from its compact storage form.
    ///
    /// # Returns
    /// The `BlockType` this block stores.
    pub fn get_block_type(&self) -> BlockType {
        BlockType::get_block_type_from_int(self.block_type)
    }
}
