//! # Player State Module
//!
//! This module owns the player's physical presence in the world:
//!
//! * **Bounding box**: the fixed-size axis-aligned volume hanging below the
//!   camera, rebuilt from the camera position whenever it is needed
//! * **Collision**: the per-axis resolver that clamps proposed camera
//!   movement so the volume never ends a frame inside solid geometry
//!
//! The player has no state of its own beyond the camera position; both the
//! volume and its corners are derived data.

pub mod bounding_box;
pub mod collision;
