//! Game state and core simulation types
//!
//! The frame loop owns a single `GameState`; every update takes it (or
//! one of its entities) by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{GridLayout, build_field};
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Blocks remain
    #[default]
    Playing,
    /// Every block has been destroyed
    Cleared,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Units per second
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(BALL_START, BALL_START_VELOCITY)
    }
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            rect: Rect::new(pos, BALL_SIZE, BALL_SIZE, BALL_COLOR),
            vel,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.rect.pos
    }
}

/// The player's paddle
///
/// Moves horizontally only. It is not clamped to the arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Units per second
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new(PADDLE_START, PADDLE_SPEED)
    }
}

impl Paddle {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            rect: Rect::new(pos, PADDLE_WIDTH, PADDLE_HEIGHT, PADDLE_COLOR),
            speed,
        }
    }

    /// Move by `direction * dt * speed` along x (`direction` is -1 or +1)
    pub fn move_horizontal(&mut self, direction: f32, dt: f32) {
        self.rect.pos.x += direction * dt * self.speed;
    }
}

/// Destructible blocks
///
/// Removal swaps the last block into the hole, so iteration order is not
/// stable across removals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockField {
    blocks: Vec<Rect>,
}

impl BlockField {
    pub fn from_blocks(blocks: Vec<Rect>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[Rect] {
        &self.blocks
    }

    /// Remove the block at `index` in O(1)
    pub fn swap_remove(&mut self, index: usize) -> Rect {
        self.blocks.swap_remove(index)
    }
}

impl<'a> IntoIterator for &'a BlockField {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: BlockField,
    /// Arena size used for wall checks
    pub arena: Vec2,
    /// Blocks destroyed so far
    pub blocks_destroyed: u32,
    /// Freeze the ball once the field is cleared
    pub stop_when_cleared: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Paddle::default(), Ball::default(), &GridLayout::default())
    }
}

impl GameState {
    pub fn new(paddle: Paddle, ball: Ball, layout: &GridLayout) -> Self {
        Self::with_blocks(paddle, ball, build_field(layout))
    }

    pub fn with_blocks(paddle: Paddle, ball: Ball, blocks: BlockField) -> Self {
        let phase = if blocks.is_empty() {
            GamePhase::Cleared
        } else {
            GamePhase::Playing
        };
        Self {
            phase,
            paddle,
            ball,
            blocks,
            arena: ARENA_SIZE,
            blocks_destroyed: 0,
            stop_when_cleared: false,
        }
    }

    /// Build the initial state from user settings
    pub fn from_settings(settings: &crate::Settings) -> Self {
        let mut state = Self::new(
            Paddle::new(PADDLE_START, settings.paddle_speed),
            Ball::new(BALL_START, settings.ball_velocity),
            &GridLayout::default(),
        );
        state.stop_when_cleared = settings.stop_when_cleared;
        state
    }
}
