//! # Voxel World Layer
//!
//! This module contains the voxel data layer: the sparse world grid the
//! movement and interaction systems read from and write to.
//!
//! ## Architecture
//!
//! The voxel system is organized into several key components:
//!
//! * **Block**: Defines individual voxel types and their two solidity
//!   predicates (movement-blocking and ray-targetable)
//! * **Chunk**: Manages fixed-size 16x16x16 arrays of blocks with O(1)
//!   per-cell reads, writes, and movement probes
//! * **World**: Coordinates chunks and provides the unified world-space
//!   query surface (`get_voxel` / `set_voxel` / `blocks_movement_at`)
//!
//! ## Data Flow
//!
//! 1. The world receives requests for cell access or modification in
//!    world-space coordinates
//! 2. The world resolves the containing cell and delegates to the owning
//!    chunk, creating it on demand for writes
//! 3. Collision, targeting, and placement all observe the same cells on the
//!    same frame — no occupancy is cached outside this module

pub mod block;
pub mod chunk;
pub mod world;
