//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides functionality for block type identification, conversion, and
//! the two solidity predicates the interaction layer is built on: whether a
//! block stops the player's body, and whether it stops the targeting ray.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// Each variant represents a distinct type of block. The `FromPrimitive`
/// derive allows conversion from the compact storage integer, which is how
/// chunks hold their cells in memory.
///
/// `AIR` is the distinguished "no block here" tag; a cell that reads back as
/// `AIR` and a cell that was never written are indistinguishable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block: non-solid, invisible, and ignored by every query.
    AIR,

    /// A basic dirt block, used as a common building material.
    DIRT,

    /// A grass block, the default surface of generated terrain.
    GRASS,

    /// A stone block, the default filler below the surface.
    STONE,

    /// A wooden block with a bark texture on all sides.
    WOOD,

    /// A sand block, found near water level.
    SAND,

    /// A water block. Water is targetable by the aim ray like any other
    /// solid surface, but never obstructs the player's movement.
    WATER,
}

/// Compile-time map from lowercase block names to block types.
///
/// Used when parsing configuration files and hotbar selections, where blocks
/// are referred to by name rather than storage integer.
static BLOCK_NAMES: phf::Map<&'static str, BlockType> = phf::phf_map! {
    "air" => BlockType::AIR,
    "dirt" => BlockType::DIRT,
    "grass" => BlockType::GRASS,
    "stone" => BlockType::STONE,
    "wood" => BlockType::WOOD,
    "sand" => BlockType::SAND,
    "water" => BlockType::WATER,
};

/// The number of block type variants, including `AIR`.
pub const BLOCK_TYPE_COUNT: BlockTypeSize = 7;

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// This is used when reading cells out of chunk storage, converting
    /// from the compact storage format to the rich enum type.
    ///
    /// # Arguments
    /// * `btype` - The block type as a `BlockTypeSize`
    ///
    /// # Returns
    /// The corresponding `BlockType`
    ///
    /// # Panics
    /// Panics if the input value doesn't correspond to a valid `BlockType`.
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Self {
        let btype_option = num::FromPrimitive::from_u8(btype as BlockTypeSize);
        btype_option.unwrap()
    }

    /// Looks up a block type by its lowercase name.
    ///
    /// # Arguments
    /// * `name` - The block name, e.g. `"stone"`
    ///
    /// # Returns
    /// The matching `BlockType`, or `None` for an unknown name.
    pub fn from_name(name: &str) -> Option<Self> {
        BLOCK_NAMES.get(name).copied()
    }

    /// Generates a random non-air, non-water block type.
    ///
    /// This is primarily used for testing and the random chunk generator.
    ///
    /// # Returns
    /// A random `BlockType` that is neither `AIR` nor `WATER`
    pub fn get_random_type() -> Self {
        num::FromPrimitive::from_u8(fastrand::u8(1..BLOCK_TYPE_COUNT - 1)).unwrap()
    }

    /// Whether this block obstructs the player's body.
    ///
    /// Water is the one targetable block the player can move through, so
    /// collision probes treat it exactly like air.
    ///
    /// # Returns
    /// `true` if the player's bounding volume may not overlap this block.
    pub fn blocks_movement(&self) -> bool {
        !matches!(self, BlockType::AIR | BlockType::WATER)
    }

    /// Whether the aim ray stops on this block.
    ///
    /// Every block except `AIR` presents a surface to the targeting ray;
    /// water included, so blocks can be placed on a water surface.
    ///
    /// # Returns
    /// `true` if the targeting ray should report a hit on this block.
    pub fn is_targetable(&self) -> bool {
        !matches!(self, BlockType::AIR)
    }

    /// All block types a player can select for placement.
    ///
    /// This is the hotbar ordering: every variant except `AIR`, in storage
    /// order. Removal is expressed by placing `AIR`, which is not a
    /// selectable type.
    ///
    /// # Returns
    /// A slice of the placeable block types.
    pub fn placeable() -> &'static [BlockType] {
        &[
            BlockType::DIRT,
            BlockType::GRASS,
            BlockType::STONE,
            BlockType::WOOD,
            BlockType::SAND,
            BlockType::WATER,
        ]
    }
}
