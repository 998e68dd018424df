//! # Camera State Management
//!
//! This module handles all camera-related functionality including:
//! - Camera position and orientation tracking
//! - Movement intent processing for camera control
//! - Producing the frame's proposed position for collision resolution
//!
//! ## Core Components
//! - `Camera`: Represents the camera's position and orientation in 3D space
//! - `CameraController`: Turns per-frame movement intent into displacement
//!
//! The camera's position is authoritative for the player: the bounding
//! volume is derived from it every frame, and it is only ever moved by
//! committing a collision-resolved position back through `commit_position`.

use cgmath::Point3;

use super::MovementIntent;

pub mod camera;

/// Manages the camera and its movement pipeline.
///
/// This is the main interface for interacting with the camera system. Each
/// frame it ingests the player's movement intent, proposes a new camera
/// position, and — after the collision resolver has clamped the proposal —
/// commits the resolved position.
///
/// # Fields
/// - `camera`: The current camera state (position, orientation)
/// - `camera_controller`: Accumulates intent and produces displacement
pub struct CameraState {
    /// The current camera position and orientation
    pub camera: camera::Camera,
    /// Accumulates movement intent and produces per-frame displacement
    pub camera_controller: camera::CameraController,
}

impl CameraState {
    /// Creates a new CameraState.
    ///
    /// # Arguments
    /// * `spawn_position` - Initial camera (eye) position in world space
    /// * `move_speed` - Movement speed in units per second
    /// * `sensitivity` - Mouse look sensitivity multiplier
    ///
    /// # Returns
    /// A new `CameraState` instance looking along the positive X axis.
    pub fn new(spawn_position: Point3<f32>, move_speed: f32, sensitivity: f32) -> Self {
        let camera = camera::Camera::new(spawn_position, cgmath::Deg(0.0), cgmath::Deg(0.0));
        let camera_controller = camera::CameraController::new(move_speed, sensitivity);

        CameraState {
            camera,
            camera_controller,
        }
    }

    /// Processes the frame's movement intent.
    ///
    /// # Arguments
    /// * `intent` - The player's movement intent to process
    pub fn intake_intent(&mut self, intent: &MovementIntent) {
        self.camera_controller.intake_intent(intent);
    }

    /// Advances the camera one frame and proposes a new position.
    ///
    /// Rotation is applied immediately (it cannot collide); translation is
    /// returned as a proposal that must go through collision resolution
    /// before being committed.
    ///
    /// # Arguments
    /// * `dt` - Time elapsed since the last update
    ///
    /// # Returns
    /// - `Some(proposed_position)` if the player asked to move this frame
    /// - `None` if there was no pending movement
    pub fn update(&mut self, dt: web_time::Duration) -> Option<Point3<f32>> {
        if !self.camera_controller.has_updates() {
            return None;
        }

        let displacement = self
            .camera_controller
            .get_displacement_and_reset(&mut self.camera, dt);
        if displacement == cgmath::Vector3::new(0.0, 0.0, 0.0) {
            // Rotation-only frames propose no translation
            return None;
        }

        Some(self.camera.position + displacement)
    }

    /// Commits a collision-resolved position to the camera.
    ///
    /// # Arguments
    /// * `position` - The resolved position returned by the collision resolver
    pub fn commit_position(&mut self, position: Point3<f32>) {
        self.camera.position = position;
    }
}
