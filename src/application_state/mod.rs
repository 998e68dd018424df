//! # Application State Management
//!
//! This module is the boundary between the host platform and the engine:
//! raw device events come in through the `InputManager`, and typed player
//! commands come out through the `CommandQueue`.
//!
//! ## Command Dispatch
//!
//! Nothing downstream of this module ever sees a key code or a mouse
//! button. Each frame, the latched input state is collapsed into a
//! `ProcessedInputState` snapshot, and `translate_input` turns that
//! snapshot into `PlayerCommand` values pushed onto a per-frame queue. The
//! engine drains the queue synchronously at the start of its tick, so
//! device polling and the movement/placement systems stay fully decoupled.

pub mod input_manager;
pub mod input_state;

use std::collections::VecDeque;

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::engine_state::voxels::block::block_type::BlockType;
use input_state::ProcessedInputState;

/// A direction the player can ask to move in.
///
/// Forward/backward/left/right are relative to the camera's yaw; up and
/// down run along the world's vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward where the camera is facing (horizontal projection)
    Forward,
    /// Away from where the camera is facing
    Backward,
    /// Strafe left
    Left,
    /// Strafe right
    Right,
    /// Rise along the world Y axis
    Up,
    /// Sink along the world Y axis
    Down,
}

/// A typed player command, the only input the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    /// Ask to move one frame's worth in a direction.
    Move(MoveDirection),
    /// Rotate the view by a mouse delta.
    Look {
        /// Horizontal mouse movement since the last frame
        delta_x: f64,
        /// Vertical mouse movement since the last frame
        delta_y: f64,
    },
    /// Place a block of the given type in the targeted cell.
    PlaceBlock(BlockType),
    /// Remove the targeted block.
    RemoveBlock,
    /// Change the selected block type.
    SelectBlock(BlockType),
}

/// A per-frame FIFO of player commands.
///
/// The input layer pushes commands as it translates the frame's input; the
/// engine drains them in order at the start of its tick. The queue is
/// expected to be empty between ticks.
pub struct CommandQueue {
    commands: VecDeque<PlayerCommand>,
}

impl CommandQueue {
    /// Creates an empty command queue.
    pub fn new() -> Self {
        CommandQueue {
            commands: VecDeque::new(),
        }
    }

    /// Pushes a command onto the back of the queue.
    ///
    /// # Arguments
    /// * `command` - The command to enqueue
    pub fn push(&mut self, command: PlayerCommand) {
        self.commands.push_back(command);
    }

    /// Removes and returns the oldest queued command.
    ///
    /// # Returns
    /// The next command, or `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<PlayerCommand> {
        self.commands.pop_front()
    }

    /// Whether the queue holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Translates a frame's input snapshot into player commands.
///
/// Movement keys emit a `Move` command for every frame they are active, so
/// held keys become a fresh set of action flags each tick. Placement and
/// removal fire only on the press transition — holding a mouse button does
/// not machine-gun edits. Scrolling cycles the hotbar selection through the
/// placeable types, wrapping at both ends.
///
/// # Arguments
/// * `input` - The frame's processed input snapshot
/// * `selected_block` - The currently selected block type, used for
///   placement and as the anchor for scroll cycling
/// * `queue` - The queue translated commands are pushed onto
pub fn translate_input(
    input: &ProcessedInputState,
    selected_block: BlockType,
    queue: &mut CommandQueue,
) {
    // Movement: active (pressed or held) keys re-assert their direction
    // every frame
    if input.get_key_state(KeyCode::KeyW).is_active() {
        queue.push(PlayerCommand::Move(MoveDirection::Forward));
    }
    if input.get_key_state(KeyCode::KeyS).is_active() {
        queue.push(PlayerCommand::Move(MoveDirection::Backward));
    }
    if input.get_key_state(KeyCode::KeyA).is_active() {
        queue.push(PlayerCommand::Move(MoveDirection::Left));
    }
    if input.get_key_state(KeyCode::KeyD).is_active() {
        queue.push(PlayerCommand::Move(MoveDirection::Right));
    }
    if input.get_key_state(KeyCode::Space).is_active() {
        queue.push(PlayerCommand::Move(MoveDirection::Up));
    }
    if input.get_key_state(KeyCode::ShiftLeft).is_active() {
        queue.push(PlayerCommand::Move(MoveDirection::Down));
    }

    if let Some((delta_x, delta_y)) = input.get_mouse_delta() {
        queue.push(PlayerCommand::Look { delta_x, delta_y });
    }

    // World edits: press transitions only
    if input
        .get_mouse_button_state(MouseButton::Left)
        .is_just_pressed()
    {
        queue.push(PlayerCommand::RemoveBlock);
    }
    if input
        .get_mouse_button_state(MouseButton::Right)
        .is_just_pressed()
    {
        queue.push(PlayerCommand::PlaceBlock(selected_block));
    }

    // Hotbar: one step per frame regardless of scroll magnitude
    if let Some(scroll) = input.scroll_delta {
        if scroll > 0.0 {
            queue.push(PlayerCommand::SelectBlock(cycle_selection(
                selected_block,
                1,
            )));
        } else if scroll < 0.0 {
            queue.push(PlayerCommand::SelectBlock(cycle_selection(
                selected_block,
                -1,
            )));
        }
    }
}

/// Steps the hotbar selection through the placeable block types.
///
/// # Arguments
/// * `selected` - The current selection
/// * `step` - +1 for the next type, -1 for the previous; wraps at both ends
///
/// # Returns
/// The new selection.
fn cycle_selection(selected: BlockType, step: i32) -> BlockType {
    let placeable = BlockType::placeable();
    let current = placeable
        .iter()
        .position(|btype| *btype == selected)
        .unwrap_or(0) as i32;
    let count = placeable.len() as i32;
    let next = (current + step).rem_euclid(count);
    placeable[next as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::input_state::RawInputState;

    fn drain(queue: &mut CommandQueue) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        while let Some(command) = queue.pop() {
            commands.push(command);
        }
        commands
    }

    #[test]
    fn held_movement_keys_emit_moves_every_frame() {
        let mut input = ProcessedInputState::empty();
        input
            .keyboard_states
            .insert(KeyCode::KeyW, RawInputState::Held);
        input
            .keyboard_states
            .insert(KeyCode::KeyA, RawInputState::Pressed);

        let mut queue = CommandQueue::new();
        translate_input(&input, BlockType::DIRT, &mut queue);

        let commands = drain(&mut queue);
        assert!(commands.contains(&PlayerCommand::Move(MoveDirection::Forward)));
        assert!(commands.contains(&PlayerCommand::Move(MoveDirection::Left)));
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn held_mouse_buttons_do_not_repeat_edits() {
        let mut input = ProcessedInputState::empty();
        input
            .mouse_button_states
            .insert(MouseButton::Right, RawInputState::Held);
        input
            .mouse_button_states
            .insert(MouseButton::Left, RawInputState::Held);

        let mut queue = CommandQueue::new();
        translate_input(&input, BlockType::DIRT, &mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn clicks_translate_to_typed_edits() {
        let mut input = ProcessedInputState::empty();
        input
            .mouse_button_states
            .insert(MouseButton::Left, RawInputState::Pressed);
        input
            .mouse_button_states
            .insert(MouseButton::Right, RawInputState::Pressed);

        let mut queue = CommandQueue::new();
        translate_input(&input, BlockType::STONE, &mut queue);

        let commands = drain(&mut queue);
        assert!(commands.contains(&PlayerCommand::RemoveBlock));
        assert!(commands.contains(&PlayerCommand::PlaceBlock(BlockType::STONE)));
    }

    #[test]
    fn mouse_motion_translates_to_look() {
        let mut input = ProcessedInputState::empty();
        input.mouse_delta = Some((4.0, -2.0));

        let mut queue = CommandQueue::new();
        translate_input(&input, BlockType::DIRT, &mut queue);

        assert_eq!(
            queue.pop(),
            Some(PlayerCommand::Look {
                delta_x: 4.0,
                delta_y: -2.0
            })
        );
    }

    #[test]
    fn scroll_cycles_the_selection_with_wrapping() {
        let placeable = BlockType::placeable();

        // Scrolling forward from the last type wraps to the first
        let mut input = ProcessedInputState::empty();
        input.scroll_delta = Some(1.0);
        let mut queue = CommandQueue::new();
        translate_input(&input, *placeable.last().unwrap(), &mut queue);
        assert_eq!(
            queue.pop(),
            Some(PlayerCommand::SelectBlock(placeable[0]))
        );

        // Scrolling backward from the first type wraps to the last
        let mut input = ProcessedInputState::empty();
        input.scroll_delta = Some(-1.0);
        let mut queue = CommandQueue::new();
        translate_input(&input, placeable[0], &mut queue);
        assert_eq!(
            queue.pop(),
            Some(PlayerCommand::SelectBlock(*placeable.last().unwrap()))
        );
    }
}
