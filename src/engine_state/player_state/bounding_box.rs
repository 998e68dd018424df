//! # Player Bounding Box Module
//!
//! This module defines the player's collision volume: an axis-aligned box of
//! fixed size whose center tracks the camera. The box is plain geometric
//! data — a center plus half-extents — with a pure function producing its
//! eight world-space corners, so nothing here depends on any scene or
//! rendering representation.

use cgmath::{Point3, Vector3};

/// Full width of the player's collision volume, in world units.
pub const PLAYER_WIDTH: f32 = 0.8;
/// Full height of the player's collision volume, in world units.
pub const PLAYER_HEIGHT: f32 = 1.75;
/// Full depth of the player's collision volume, in world units.
pub const PLAYER_DEPTH: f32 = 0.8;

/// Vertical distance from the camera (eye point) down to the box center.
///
/// The camera sits near the top of the volume; offsetting its position down
/// by this amount yields the box center each frame.
pub const CAMERA_CENTER_OFFSET: f32 = 0.75;

/// An axis-aligned box defined by its center and half-extents.
///
/// The player's volume is rebuilt from the camera position every time it is
/// needed and never persisted, so it can never drift out of sync with the
/// camera.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// The box center in world space.
    pub center: Point3<f32>,
    /// Half the box size along each axis.
    pub half_extents: Vector3<f32>,
}

impl BoundingBox {
    /// Creates a box from an explicit center and half-extents.
    ///
    /// # Arguments
    /// * `center` - The box center in world space
    /// * `half_extents` - Half the box size along each axis
    ///
    /// # Returns
    /// A new `BoundingBox`.
    pub fn new(center: Point3<f32>, half_extents: Vector3<f32>) -> Self {
        BoundingBox {
            center,
            half_extents,
        }
    }

    /// Derives the player's collision volume from the camera position.
    ///
    /// The center is the camera position offset down by
    /// `CAMERA_CENTER_OFFSET`; the half-extents are the fixed player size.
    ///
    /// # Arguments
    /// * `camera_position` - The camera (eye) position in world space
    ///
    /// # Returns
    /// The player's `BoundingBox` for that camera position.
    pub fn from_camera_position(camera_position: Point3<f32>) -> Self {
        BoundingBox {
            center: Point3::new(
                camera_position.x,
                camera_position.y - CAMERA_CENTER_OFFSET,
                camera_position.z,
            ),
            half_extents: Vector3::new(
                PLAYER_WIDTH * 0.5,
                PLAYER_HEIGHT * 0.5,
                PLAYER_DEPTH * 0.5,
            ),
        }
    }

    /// The eight corners of the box in world space.
    ///
    /// Pure function of the center and half-extents. Corners are what the
    /// collision resolver probes against the world grid and what the
    /// placement engine floors for its self-overlap check.
    ///
    /// # Returns
    /// The corners as an array of eight world-space points.
    pub fn corners(&self) -> [Point3<f32>; 8] {
        let mut corners = [self.center; 8];
        for (index, corner) in corners.iter_mut().enumerate() {
            let sign_x = if index & 1 == 0 { -1.0 } else { 1.0 };
            let sign_y = if index & 2 == 0 { -1.0 } else { 1.0 };
            let sign_z = if index & 4 == 0 { -1.0 } else { 1.0 };
            corner.x += sign_x * self.half_extents.x;
            corner.y += sign_y * self.half_extents.y;
            corner.z += sign_z * self.half_extents.z;
        }
        corners
    }
}
