#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Interaction
//!
//! The movement and interaction layer of a first-person voxel client: it
//! turns continuous player input and camera state into discrete world edits
//! (placing and removing unit cubes) and keeps the player's body out of
//! solid geometry.
//!
//! ## Key Modules
//!
//! * `application_state` - Input intake and typed command dispatch
//! * `engine_state` - The per-frame pipeline: collision-resolved movement,
//!   raycast targeting, placement, and highlight derivation over a sparse
//!   chunked world grid
//!
//! ## Architecture
//!
//! The layer is strictly single-threaded and frame-driven. Raw device
//! events are latched by the input manager, collapsed once per frame into
//! press/hold/release transitions, and translated into typed commands on a
//! queue. The engine drains the queue each tick, resolves the requested
//! movement one axis at a time against the world grid (sliding along
//! whatever axes stay clear), executes any requested block edits against
//! the cell the camera is aiming at, and re-derives the targeting highlight
//! from a fresh raycast.
//!
//! The world grid is the sole source of truth for occupied space: no
//! occupancy is cached between frames, so an edit is visible to the very
//! next collision probe and targeting ray.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Run the bundled headless session
//! fn main() {
//!     voxel_interaction::run();
//! }
//! ```

use std::path::Path;

use log::info;
use web_time::Duration;

use application_state::{CommandQueue, MoveDirection, PlayerCommand};
use engine_state::config::EngineConfig;
use engine_state::voxels::block::block_type::BlockType;
use engine_state::EngineState;

pub mod application_state;
pub mod engine_state;

/// Path the session config is loaded from when present.
const CONFIG_PATH: &str = "config.json";

/// Frame duration of the scripted session.
const FRAME_TIME: Duration = Duration::from_millis(33);

/// Runs a short headless session against a generated world.
///
/// Loads configuration (falling back to defaults when no config file is
/// present), spawns the player above flat terrain, and scripts a small
/// command sequence — walk, aim down, build a column until it reaches the
/// player's own body, remove a block — logging what the world does in
/// response. The session exercises the same command path a windowed host
/// would drive.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match EngineConfig::load_from_file(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(error) => {
            info!("using default config ({})", error);
            EngineConfig::default()
        }
    };

    let mut engine = EngineState::new(config);
    let mut queue = CommandQueue::new();

    info!(
        "spawned at {:?} holding {:?}",
        engine.camera_state.camera.position,
        engine.selected_block(),
    );

    // Walk forward for a second
    for _ in 0..30 {
        queue.push(PlayerCommand::Move(MoveDirection::Forward));
        engine.tick(&mut queue, FRAME_TIME);
    }
    info!("walked to {:?}", engine.camera_state.camera.position);

    // Aim straight down; the rotation clamps at vertical
    queue.push(PlayerCommand::Look {
        delta_x: 0.0,
        delta_y: 500.0,
    });
    engine.tick(&mut queue, FRAME_TIME);
    info!("aiming at {:?}", engine.highlight());

    // Build a stone column upward until it collides with the player's own
    // body; the final placement is rejected and the grid stays unchanged
    queue.push(PlayerCommand::SelectBlock(BlockType::STONE));
    engine.tick(&mut queue, FRAME_TIME);
    for _ in 0..3 {
        let selected = engine.selected_block();
        queue.push(PlayerCommand::PlaceBlock(selected));
        engine.tick(&mut queue, FRAME_TIME);
    }

    // Take the top of the column back off
    queue.push(PlayerCommand::RemoveBlock);
    engine.tick(&mut queue, FRAME_TIME);

    info!(
        "session finished at {:?}, highlighting {:?}",
        engine.camera_state.camera.position,
        engine.highlight(),
    );
}
