//! # Block Side Module
//!
//! This module defines the different faces/sides of a voxel block.
//! The targeting raycast reports which face of a cell it entered through, and
//! the placement engine offsets along that face's outward normal, so every
//! face carries its axis-aligned unit normal.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each variant corresponds to a specific face and is assigned a unique
/// integer value for efficient storage. In a cubic-voxel world every face
/// normal is axis-aligned, so each component of a face's normal is one of
/// {-1, 0, 1}.
///
/// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The front face (facing positive Z)
    FRONT = 0,

    /// The back face (facing negative Z)
    BACK = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// This is useful for iterating over all possible faces of a block.
    /// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
    ///
    /// # Returns
    /// An array containing all `BlockSide` variants.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::LEFT,
            BlockSide::RIGHT,
        ]
    }

    /// The outward unit normal of this face.
    ///
    /// # Returns
    /// An axis-aligned unit vector pointing out of the block through this face.
    pub fn normal(&self) -> Vector3<f32> {
        match self {
            BlockSide::FRONT => Vector3::new(0.0, 0.0, 1.0),
            BlockSide::BACK => Vector3::new(0.0, 0.0, -1.0),
            BlockSide::BOTTOM => Vector3::new(0.0, -1.0, 0.0),
            BlockSide::TOP => Vector3::new(0.0, 1.0, 0.0),
            BlockSide::LEFT => Vector3::new(-1.0, 0.0, 0.0),
            BlockSide::RIGHT => Vector3::new(1.0, 0.0, 0.0),
        }
    }

    /// The face a ray enters through when it steps into a cell along an axis.
    ///
    /// A ray walking in the positive X direction crosses into a cell through
    /// the face whose outward normal points back at it, i.e. the LEFT face,
    /// and symmetrically for every other axis and sign.
    ///
    /// # Arguments
    /// * `axis` - The axis the ray stepped along (0 = X, 1 = Y, 2 = Z)
    /// * `step` - The sign of the step along that axis (+1 or -1)
    ///
    /// # Returns
    /// The `BlockSide` the ray entered the cell through.
    pub fn from_entry_step(axis: usize, step: i32) -> BlockSide {
        match (axis, step > 0) {
            (0, true) => BlockSide::LEFT,
            (0, false) => BlockSide::RIGHT,
            (1, true) => BlockSide::BOTTOM,
            (1, false) => BlockSide::TOP,
            (2, true) => BlockSide::BACK,
            (2, false) => BlockSide::FRONT,
            _ => unreachable!("axis index out of range"),
        }
    }
}
