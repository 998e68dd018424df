//! # Interaction Layer
//!
//! This module contains the targeting and world-editing systems:
//!
//! * **Raycast**: walks the aim ray from the camera through the grid and
//!   reports the first targeted surface point with its face normal
//! * **Placement**: turns that intersection into a single-cell edit, with a
//!   self-overlap guard so the player cannot build inside their own body
//! * **Highlight**: derives the targeted cell's center for visual feedback
//!
//! All three are re-evaluated against the live world every frame; a world
//! edit made by the placement engine is visible to the next raycast and the
//! next collision probe with no caching in between.

pub mod highlight;
pub mod placement;
pub mod raycast;
