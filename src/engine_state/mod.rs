//! # Engine State Module
//!
//! The core engine module: it owns the world grid and the camera, drains
//! the frame's player commands, and runs the movement/interaction pipeline
//! in a fixed order every tick:
//!
//! 1. Drain typed commands into a movement intent and a list of world edits
//! 2. Propose a camera position from the intent and resolve it against the
//!    grid, axis by axis
//! 3. Execute the frame's placements/removals against the live grid
//! 4. Recompute the targeting highlight from a fresh raycast
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the interaction layer
//! * `camera_state` - Camera position, orientation, and movement proposals
//! * `player_state` - The player's collision volume and the per-axis resolver
//! * `interaction` - Targeting raycast, placement engine, highlight
//! * `voxels` - The sparse world grid
//! * `config` - Tunable session parameters
//!
//! ## Concurrency Model
//!
//! Strictly single-threaded, one tick per rendered frame. The world grid is
//! the only shared mutable resource and there is exactly one logical actor,
//! so an edit made in step 3 is simply visible to the raycast in step 4 and
//! to every probe of the following frame.

use cgmath::Point3;
use web_time::Duration;

use crate::application_state::{CommandQueue, MoveDirection, PlayerCommand};
use camera_state::CameraState;
use config::EngineConfig;
use interaction::highlight::highlight_position;
use interaction::placement::{place_voxel, PlacementOutcome};
use interaction::raycast::calculate_intersection;
use player_state::bounding_box::BoundingBox;
use player_state::collision::resolve_movement;
use voxels::block::block_type::BlockType;
use voxels::block::BLOCK_TYPE_DISPLAY_NAMES;
use voxels::chunk::CHUNK_DIMENSION;
use voxels::world::World;

pub mod camera_state;
pub mod config;
pub mod interaction;
pub mod player_state;
pub mod voxels;

/// Radius, in chunks, of the terrain generated around the spawn column.
const SPAWN_CHUNK_RADIUS: i32 = 2;

/// The player's movement intent for one frame.
///
/// A fresh set of abstract action flags is rebuilt from the command queue
/// every tick; holding a key means the flag is simply set again next frame.
#[derive(Default)]
pub struct MovementIntent {
    /// Move toward the camera's yaw direction
    pub move_forward: bool,
    /// Move away from the camera's yaw direction
    pub move_backward: bool,
    /// Strafe left
    pub move_left: bool,
    /// Strafe right
    pub move_right: bool,
    /// Rise along the world Y axis
    pub move_up: bool,
    /// Sink along the world Y axis
    pub move_down: bool,

    /// View rotation delta accumulated over the frame, if any
    pub rotate_view: Option<(f64, f64)>,
}

/// Everything a frame's command queue asked for, in consumable form.
struct FrameCommands {
    /// The movement flags for this frame
    intent: MovementIntent,
    /// World edits in queue order; `AIR` entries are removals
    edits: Vec<BlockType>,
}

/// The main state container for the interaction layer.
///
/// Owns the world grid, the camera, and the hotbar selection, and advances
/// them one frame at a time from the command queue.
pub struct EngineState {
    /// Camera state managing position, orientation and movement proposals
    pub camera_state: CameraState,
    /// The voxel world, sole source of truth for occupied space
    pub world: World,
    /// The block type placed by an untyped placement request
    selected_block: BlockType,
    /// Center of the currently targeted cell, recomputed every tick
    highlight: Option<Point3<f32>>,
    /// Session parameters, read-only after startup
    config: EngineConfig,
}

impl EngineState {
    /// Creates a new engine state with terrain generated around the spawn.
    ///
    /// # Arguments
    ///
    /// * `config` - Session parameters; the spawn position decides which
    ///   chunks are pre-generated
    ///
    /// # Returns
    ///
    /// A fully initialized `EngineState` with the camera at the configured
    /// spawn position.
    pub fn new(config: EngineConfig) -> Self {
        let spawn = Point3::new(
            config.spawn_position[0],
            config.spawn_position[1],
            config.spawn_position[2],
        );

        let mut world = World::new();
        let spawn_chunk_x = (spawn.x / CHUNK_DIMENSION as f32).floor() as i32;
        let spawn_chunk_z = (spawn.z / CHUNK_DIMENSION as f32).floor() as i32;
        for x in -SPAWN_CHUNK_RADIUS..=SPAWN_CHUNK_RADIUS {
            for z in -SPAWN_CHUNK_RADIUS..=SPAWN_CHUNK_RADIUS {
                for y in -1..=0 {
                    world.add_chunk_at(Point3::new(spawn_chunk_x + x, y, spawn_chunk_z + z));
                }
            }
        }

        let selected_block = match BlockType::from_name(&config.starting_block) {
            Some(block_type) if block_type != BlockType::AIR => block_type,
            _ => {
                log::warn!(
                    "unknown or unplaceable starting block {:?}, selecting dirt",
                    config.starting_block,
                );
                BlockType::DIRT
            }
        };

        let camera_state = CameraState::new(spawn, config.move_speed, config.mouse_sensitivity);

        Self {
            camera_state,
            world,
            selected_block,
            highlight: None,
            config,
        }
    }

    /// Advances the engine one frame.
    ///
    /// Drains the command queue, moves the camera through collision
    /// resolution, executes the frame's world edits, and recomputes the
    /// highlight. Every step either completes immediately or is a no-op;
    /// nothing here can fail.
    ///
    /// # Arguments
    ///
    /// * `queue` - The frame's command queue; empty when this returns
    /// * `dt` - Time elapsed since the last tick
    pub fn tick(&mut self, queue: &mut CommandQueue, dt: Duration) {
        let frame = self.drain_commands(queue);

        // Movement: propose, resolve per axis, commit
        self.camera_state.intake_intent(&frame.intent);
        if let Some(proposed) = self.camera_state.update(dt) {
            let current = self.camera_state.camera.position;
            let resolved = resolve_movement(&self.world, current, proposed);
            self.camera_state.commit_position(resolved);
        }

        // World edits, in the order they were requested
        for block_type in frame.edits {
            self.execute_edit(block_type);
        }

        // The highlight always reflects this frame's final world state
        let intersection = calculate_intersection(
            &self.camera_state.camera,
            &self.world,
            self.config.reach_distance,
        );
        self.highlight = highlight_position(intersection.as_ref());
    }

    /// Converts the queued commands into per-frame movement flags and edits.
    ///
    /// Selection changes take effect immediately during the drain; movement
    /// and edits are returned for the tick pipeline to consume.
    fn drain_commands(&mut self, queue: &mut CommandQueue) -> FrameCommands {
        let mut intent = MovementIntent::default();
        let mut edits = Vec::new();

        while let Some(command) = queue.pop() {
            match command {
                PlayerCommand::Move(direction) => match direction {
                    MoveDirection::Forward => intent.move_forward = true,
                    MoveDirection::Backward => intent.move_backward = true,
                    MoveDirection::Left => intent.move_left = true,
                    MoveDirection::Right => intent.move_right = true,
                    MoveDirection::Up => intent.move_up = true,
                    MoveDirection::Down => intent.move_down = true,
                },
                PlayerCommand::Look { delta_x, delta_y } => {
                    let (acc_x, acc_y) = intent.rotate_view.unwrap_or((0.0, 0.0));
                    intent.rotate_view = Some((acc_x + delta_x, acc_y + delta_y));
                }
                PlayerCommand::PlaceBlock(block_type) => edits.push(block_type),
                PlayerCommand::RemoveBlock => edits.push(BlockType::AIR),
                PlayerCommand::SelectBlock(block_type) => self.set_selected_block(block_type),
            }
        }

        FrameCommands { intent, edits }
    }

    /// Executes a single placement or removal against the current target.
    ///
    /// The targeting ray is recast per edit so a removal followed by a
    /// placement in the same frame acts on the updated grid.
    fn execute_edit(&mut self, block_type: BlockType) {
        let intersection = calculate_intersection(
            &self.camera_state.camera,
            &self.world,
            self.config.reach_distance,
        );
        let bounding_box = BoundingBox::from_camera_position(self.camera_state.camera.position);

        match place_voxel(&mut self.world, intersection, &bounding_box, block_type) {
            PlacementOutcome::Written(cell) => {
                if block_type == BlockType::AIR {
                    log::info!("removed block at cell ({}, {}, {})", cell.x, cell.y, cell.z);
                } else {
                    log::info!(
                        "placed {} at cell ({}, {}, {})",
                        BLOCK_TYPE_DISPLAY_NAMES[block_type as usize],
                        cell.x,
                        cell.y,
                        cell.z,
                    );
                }
            }
            PlacementOutcome::NoTarget => {
                log::debug!("edit requested with nothing targeted");
            }
            PlacementOutcome::InsidePlayer => {
                // Reason already logged by the placement engine
            }
        }
    }

    /// Changes the hotbar selection.
    ///
    /// `AIR` is not a selectable type (removal is its own command) and is
    /// ignored with a warning.
    fn set_selected_block(&mut self, block_type: BlockType) {
        if block_type == BlockType::AIR {
            log::warn!("ignoring request to select air");
            return;
        }
        self.selected_block = block_type;
        log::info!(
            "selected {}",
            BLOCK_TYPE_DISPLAY_NAMES[block_type as usize],
        );
    }

    /// The block type an untyped placement request will place.
    pub fn selected_block(&self) -> BlockType {
        self.selected_block
    }

    /// Center of the currently targeted cell, if anything is targeted.
    ///
    /// Derived display data only; the caller hides the highlight when this
    /// is `None`.
    pub fn highlight(&self) -> Option<Point3<f32>> {
        self.highlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Rad;
    use std::f32::consts::FRAC_PI_2;

    /// A config spawning mid-air above flat terrain, clear of cell
    /// boundaries so targeting rays land inside cells rather than on their
    /// edges.
    fn test_config() -> EngineConfig {
        EngineConfig {
            spawn_position: [8.5, 8.0, 8.5],
            ..EngineConfig::default()
        }
    }

    fn tick_once(engine: &mut EngineState, queue: &mut CommandQueue) {
        engine.tick(queue, Duration::from_secs(1));
    }

    #[test]
    fn forward_commands_move_the_camera_through_open_air() {
        let mut engine = EngineState::new(test_config());
        let mut queue = CommandQueue::new();
        queue.push(PlayerCommand::Move(MoveDirection::Forward));

        tick_once(&mut engine, &mut queue);

        // Yaw 0 faces positive X; one second at the default speed
        let position = engine.camera_state.camera.position;
        assert!((position.x - 12.5).abs() < 1e-4);
        assert!((position.y - 8.0).abs() < 1e-4);
        assert!((position.z - 8.5).abs() < 1e-4);
        assert!(queue.is_empty());
    }

    #[test]
    fn descending_into_the_ground_is_clamped() {
        let mut engine = EngineState::new(test_config());
        let mut queue = CommandQueue::new();

        // Sink for a long time; the ground surface is at y = 4
        for _ in 0..20 {
            queue.push(PlayerCommand::Move(MoveDirection::Down));
            engine.tick(&mut queue, Duration::from_millis(250));
        }

        let position = engine.camera_state.camera.position;
        // Camera cannot sink below ground + box bottom offset (1.625)
        assert!(position.y >= 5.6);
        // And the volume ends the run clear of every solid cell
        let bounding_box = BoundingBox::from_camera_position(position);
        for corner in bounding_box.corners() {
            assert!(!engine.world.blocks_movement_at(corner.x, corner.y, corner.z));
        }
    }

    #[test]
    fn placement_command_writes_the_cell_above_the_hit_face() {
        let mut engine = EngineState::new(test_config());
        // Aim straight down at the grass surface below the spawn
        engine.camera_state.camera.pitch = Rad(-FRAC_PI_2);

        let mut queue = CommandQueue::new();
        queue.push(PlayerCommand::PlaceBlock(BlockType::STONE));
        tick_once(&mut engine, &mut queue);

        // Surface cell is (8, 3, 8); the placement lands one cell above it
        assert_eq!(
            engine.world.get_voxel(8.5, 4.5, 8.5),
            Some(BlockType::STONE)
        );
        assert!(engine.highlight().is_some());
    }

    #[test]
    fn remove_command_clears_the_hit_cell() {
        let mut engine = EngineState::new(test_config());
        engine.camera_state.camera.pitch = Rad(-FRAC_PI_2);
        assert_eq!(
            engine.world.get_voxel(8.5, 3.5, 8.5),
            Some(BlockType::GRASS)
        );

        let mut queue = CommandQueue::new();
        queue.push(PlayerCommand::RemoveBlock);
        tick_once(&mut engine, &mut queue);

        assert_eq!(engine.world.get_voxel(8.5, 3.5, 8.5), None);
    }

    #[test]
    fn edits_with_nothing_targeted_change_nothing() {
        let mut engine = EngineState::new(test_config());
        // Aim straight up at the sky
        engine.camera_state.camera.pitch = Rad(FRAC_PI_2);

        let mut queue = CommandQueue::new();
        queue.push(PlayerCommand::PlaceBlock(BlockType::STONE));
        queue.push(PlayerCommand::RemoveBlock);
        tick_once(&mut engine, &mut queue);

        // The surface below is untouched and nothing is highlighted
        assert_eq!(
            engine.world.get_voxel(8.5, 3.5, 8.5),
            Some(BlockType::GRASS)
        );
        assert_eq!(engine.highlight(), None);
    }

    #[test]
    fn selection_commands_update_the_hotbar() {
        let mut engine = EngineState::new(test_config());
        assert_eq!(engine.selected_block(), BlockType::DIRT);

        let mut queue = CommandQueue::new();
        queue.push(PlayerCommand::SelectBlock(BlockType::SAND));
        tick_once(&mut engine, &mut queue);
        assert_eq!(engine.selected_block(), BlockType::SAND);

        // Air is not selectable
        queue.push(PlayerCommand::SelectBlock(BlockType::AIR));
        tick_once(&mut engine, &mut queue);
        assert_eq!(engine.selected_block(), BlockType::SAND);
    }

    #[test]
    fn highlight_tracks_the_targeted_surface() {
        let mut engine = EngineState::new(test_config());
        engine.camera_state.camera.pitch = Rad(-FRAC_PI_2);

        let mut queue = CommandQueue::new();
        tick_once(&mut engine, &mut queue);

        // Aiming at the top of the grass cell (8, 3, 8)
        let highlight = engine.highlight().expect("surface within reach");
        assert!((highlight.x - 8.5).abs() < 1e-4);
        assert!((highlight.y - 3.5).abs() < 1e-4);
        assert!((highlight.z - 8.5).abs() < 1e-4);
    }
}
