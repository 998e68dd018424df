//! # Highlight Presenter Module
//!
//! This module derives the display position for the targeting highlight:
//! the center of the cell the camera is currently aimed at. It is purely
//! derived data — no state, no side effects — and must be recomputed every
//! frame, since it depends on a fresh raycast against a world that may have
//! just changed.

use cgmath::Point3;

use crate::engine_state::interaction::raycast::Intersection;

/// Computes the center of the targeted cell for visual feedback.
///
/// For each axis the hit point is pulled half a unit back along the face
/// normal (into the hit cell) and snapped with `ceil(..) - 0.5`, which
/// lands on the half-integer center of the targeted cell. The caller draws
/// a unit wireframe at the returned position and hides it when there is no
/// intersection.
///
/// # Arguments
/// * `intersection` - The current targeting result, if anything is targeted
///
/// # Returns
/// The world-space center of the targeted cell, or `None` when nothing is
/// targeted and the highlight should be hidden.
pub fn highlight_position(intersection: Option<&Intersection>) -> Option<Point3<f32>> {
    let intersection = intersection?;
    let position = intersection.position;
    let normal = intersection.normal;
    Some(Point3::new(
        (position.x + normal.x * -0.5).ceil() - 0.5,
        (position.y + normal.y * -0.5).ceil() - 0.5,
        (position.z + normal.z * -0.5).ceil() - 0.5,
    ))
}
