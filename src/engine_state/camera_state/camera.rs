//! # Camera Implementation
//!
//! This module contains the core camera implementation including:
//! - Camera representation and orientation in 3D space
//! - Camera controller for translating movement intent into displacement
//!
//! ## Key Components
//! - `Camera`: Represents the camera's position and orientation in 3D space;
//!   its position is the player's eye point and the origin of the aim ray
//! - `CameraController`: Accumulates per-frame movement intent and converts
//!   it into a desired displacement for collision resolution

use cgmath::*;
use std::f32::consts::FRAC_PI_2;
use web_time::Duration;

use crate::engine_state::MovementIntent;

/// Safe limit for pitch to prevent gimbal lock
const SAFE_FRAC_PI_2: f32 = FRAC_PI_2 - 0.0001;

/// Represents a first-person camera in 3D space.
///
/// The camera maintains its position and orientation in the world. The
/// position doubles as the player's eye point: the collision volume hangs
/// below it and the targeting ray is cast from it along the view direction.
///
/// # Fields
/// - `position`: The camera's position in world space
/// - `yaw`: Horizontal rotation (around Y axis) in radians
/// - `pitch`: Vertical rotation (around X axis) in radians
#[derive(Debug)]
pub struct Camera {
    /// The camera's position in world space
    pub position: Point3<f32>,
    /// Horizontal rotation (around Y axis) in radians
    pub yaw: Rad<f32>,
    /// Vertical rotation (around X axis) in radians
    pub pitch: Rad<f32>,
}

impl Camera {
    /// Creates a new camera with the specified position and orientation.
    ///
    /// # Arguments
    /// * `position` - Initial position of the camera in world space. Can be any type that converts to `Point3<f32>`.
    /// * `yaw` - Initial yaw (horizontal rotation around Y axis). Can be any type that converts to `Rad<f32>`.
    /// * `pitch` - Initial pitch (vertical rotation around X axis). Can be any type that converts to `Rad<f32>`.
    ///
    /// # Returns
    /// A new `Camera` instance with the specified position and orientation.
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    /// Gets the camera's forward direction vector.
    ///
    /// This is the normalized direction the camera is facing, including
    /// pitch, and is the direction the targeting ray travels.
    ///
    /// # Returns
    /// A normalized 3D vector representing the camera's view direction.
    pub fn get_view_vec(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.0.sin_cos();
        Vector3::new(pitch_cos * yaw_cos, pitch_sin, pitch_cos * yaw_sin).normalize()
    }

    /// Applies a rotation delta and clamps pitch short of straight up/down.
    ///
    /// # Arguments
    /// * `delta_yaw` - Horizontal rotation to apply, in radians
    /// * `delta_pitch` - Vertical rotation to apply, in radians
    pub fn rotate(&mut self, delta_yaw: Rad<f32>, delta_pitch: Rad<f32>) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;

        // Clamp pitch to prevent gimbal lock
        if self.pitch < -Rad(SAFE_FRAC_PI_2) {
            self.pitch = -Rad(SAFE_FRAC_PI_2);
        } else if self.pitch > Rad(SAFE_FRAC_PI_2) {
            self.pitch = Rad(SAFE_FRAC_PI_2);
        }
    }
}

/// Accumulates movement intent and converts it into camera updates.
///
/// This struct tracks the current frame's movement amounts and rotation
/// deltas, and produces the displacement the player is asking for. The
/// displacement is only a proposal: it goes through collision resolution
/// before any of it reaches the camera's position.
#[derive(Debug)]
pub struct CameraController {
    // Movement amounts (normalized)
    amount_left: f32,
    amount_right: f32,
    amount_forward: f32,
    amount_backward: f32,
    amount_up: f32,
    amount_down: f32,

    // Rotation amounts (in radians)
    rotate_horizontal: f32,
    rotate_vertical: f32,

    // Configuration
    speed: f32,
    sensitivity: f32,
}

impl CameraController {
    /// Creates a new camera controller with the given speed and sensitivity.
    ///
    /// # Arguments
    /// * `speed` - Base movement speed in units per second
    /// * `sensitivity` - Mouse look sensitivity multiplier
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            amount_left: 0.0,
            amount_right: 0.0,
            amount_forward: 0.0,
            amount_backward: 0.0,
            amount_up: 0.0,
            amount_down: 0.0,
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            speed,
            sensitivity,
        }
    }

    /// Processes the frame's movement intent and updates controller state.
    ///
    /// The intent is a set of abstract action flags recomputed every tick by
    /// the command layer; the controller never sees device events.
    ///
    /// # Arguments
    /// * `intent` - The player's movement intent for this frame
    pub fn intake_intent(&mut self, intent: &MovementIntent) {
        if intent.move_forward {
            self.amount_forward = self.speed;
        }
        if intent.move_backward {
            self.amount_backward = self.speed;
        }
        if intent.move_left {
            self.amount_left = self.speed;
        }
        if intent.move_right {
            self.amount_right = self.speed;
        }
        if intent.move_up {
            self.amount_up = self.speed;
        }
        if intent.move_down {
            self.amount_down = self.speed;
        }
        if let Some((delta_x, delta_y)) = intent.rotate_view {
            if delta_x.abs() > 0.5 {
                self.rotate_horizontal = (delta_x as f32) * self.sensitivity;
            }
            if delta_y.abs() > 0.5 {
                self.rotate_vertical = (delta_y as f32) * self.sensitivity;
            }
        }
    }

    /// Applies rotation to the camera and returns the desired displacement.
    ///
    /// Forward/strafe movement is projected onto the horizontal plane from
    /// the camera's yaw; vertical movement runs along the world Y axis. The
    /// controller's per-frame state is reset after being consumed, so each
    /// tick starts from a clean slate.
    ///
    /// # Arguments
    /// * `camera` - The camera to rotate
    /// * `dt` - Time elapsed since the last update
    ///
    /// # Returns
    /// The displacement the player is requesting this frame, before any
    /// collision resolution.
    pub fn get_displacement_and_reset(
        &mut self,
        camera: &mut Camera,
        dt: Duration,
    ) -> Vector3<f32> {
        let dt = dt.as_secs_f32();

        // Move forward/backward and left/right along the horizontal plane
        let (yaw_sin, yaw_cos) = camera.yaw.0.sin_cos();
        let forward = Vector3::new(yaw_cos, 0.0, yaw_sin).normalize();
        let right = Vector3::new(-yaw_sin, 0.0, yaw_cos).normalize();

        let mut displacement = forward * (self.amount_forward - self.amount_backward) * dt;
        displacement += right * (self.amount_right - self.amount_left) * dt;

        // Move up/down along the world axis
        displacement.y += (self.amount_up - self.amount_down) * dt;

        // Rotate
        camera.rotate(
            Rad(self.rotate_horizontal) * self.sensitivity * dt,
            Rad(-self.rotate_vertical) * self.sensitivity * dt,
        );

        // Reset controller state
        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;
        self.amount_up = 0.0;
        self.amount_down = 0.0;
        self.amount_left = 0.0;
        self.amount_right = 0.0;
        self.amount_forward = 0.0;
        self.amount_backward = 0.0;

        displacement
    }

    /// Checks if there are any pending updates that would affect the camera.
    ///
    /// # Returns
    /// `true` if there are pending updates, `false` otherwise
    pub fn has_updates(&self) -> bool {
        self.amount_forward > 0.0
            || self.amount_backward > 0.0
            || self.amount_left > 0.0
            || self.amount_right > 0.0
            || self.amount_up > 0.0
            || self.amount_down > 0.0
            || self.rotate_horizontal != 0.0
            || self.rotate_vertical != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_with<F: FnOnce(&mut MovementIntent)>(build: F) -> MovementIntent {
        let mut intent = MovementIntent::default();
        build(&mut intent);
        intent
    }

    #[test]
    fn forward_intent_moves_along_yaw() {
        // Yaw 0 faces positive X
        let mut camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Rad(0.0), Rad(0.0));
        let mut controller = CameraController::new(2.0, 1.0);
        controller.intake_intent(&intent_with(|i| i.move_forward = true));

        let displacement =
            controller.get_displacement_and_reset(&mut camera, Duration::from_secs(1));
        assert!((displacement.x - 2.0).abs() < 1e-5);
        assert!(displacement.y.abs() < 1e-5);
        assert!(displacement.z.abs() < 1e-5);
    }

    #[test]
    fn pitched_camera_still_moves_horizontally() {
        let mut camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Rad(0.0), Rad(1.0));
        let mut controller = CameraController::new(1.0, 1.0);
        controller.intake_intent(&intent_with(|i| i.move_forward = true));

        let displacement =
            controller.get_displacement_and_reset(&mut camera, Duration::from_secs(1));
        assert!(displacement.y.abs() < 1e-5, "walking must not gain height");
    }

    #[test]
    fn vertical_intent_moves_along_world_axis() {
        let mut camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Rad(0.7), Rad(0.0));
        let mut controller = CameraController::new(3.0, 1.0);
        controller.intake_intent(&intent_with(|i| i.move_down = true));

        let displacement =
            controller.get_displacement_and_reset(&mut camera, Duration::from_secs(1));
        assert!((displacement.y + 3.0).abs() < 1e-5);
        assert!(displacement.x.abs() < 1e-5);
        assert!(displacement.z.abs() < 1e-5);
    }

    #[test]
    fn controller_resets_after_consumption() {
        let mut camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Rad(0.0), Rad(0.0));
        let mut controller = CameraController::new(2.0, 1.0);
        controller.intake_intent(&intent_with(|i| i.move_forward = true));
        assert!(controller.has_updates());

        controller.get_displacement_and_reset(&mut camera, Duration::from_millis(16));
        assert!(!controller.has_updates());

        let displacement =
            controller.get_displacement_and_reset(&mut camera, Duration::from_millis(16));
        assert_eq!(displacement, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn pitch_clamps_short_of_vertical() {
        let mut camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Rad(0.0), Rad(0.0));
        camera.rotate(Rad(0.0), Rad(10.0));
        assert!(camera.pitch.0 < FRAC_PI_2);
        camera.rotate(Rad(0.0), Rad(-20.0));
        assert!(camera.pitch.0 > -FRAC_PI_2);
    }

    #[test]
    fn view_vec_is_normalized() {
        let camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Rad(0.8), Rad(-0.4));
        let view = camera.get_view_vec();
        assert!((view.magnitude() - 1.0).abs() < 1e-5);
    }
}
