//! Per-frame simulation step
//!
//! One call to `tick` per rendered frame: paddle input first, then ball
//! integration and collision response.

use glam::Vec2;

use super::collision::{Collision, reflect_velocity, wall_collision};
use super::state::{Ball, BlockField, GamePhase, GameState, Paddle};

/// Horizontal paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDir {
    Left,
    Right,
}

impl HorizontalDir {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            HorizontalDir::Left => -1.0,
            HorizontalDir::Right => 1.0,
        }
    }
}

/// Key state sampled for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
}

impl FrameInput {
    /// Requested paddle direction; right wins when both keys are held
    pub fn direction(&self) -> Option<HorizontalDir> {
        if self.right {
            Some(HorizontalDir::Right)
        } else if self.left {
            Some(HorizontalDir::Left)
        } else {
            None
        }
    }
}

/// What changed during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// A block was destroyed; the draw batch must be rebuilt
    pub blocks_changed: bool,
    /// The last block was destroyed this frame
    pub cleared: bool,
}

/// Advance the ball by `dt` seconds
///
/// Collision priority, lowest to highest: the first overlapping block,
/// the paddle, the arena walls. Only the winning collision is applied.
/// The overlapping block is removed even when a higher priority collision
/// wins. Returns true if a block was removed.
pub fn update_ball(
    ball: &mut Ball,
    blocks: &mut BlockField,
    paddle: &Paddle,
    arena: Vec2,
    dt: f32,
) -> bool {
    let new_pos = ball.rect.pos + ball.vel * dt;
    let moved = ball.rect.moved_to(new_pos);

    let mut collision = Collision::miss();
    let mut blocks_changed = false;

    // At most one block per frame
    let block_hit = blocks
        .iter()
        .map(|block| block.collision_with(&moved))
        .enumerate()
        .find(|(_, c)| c.is_hit());
    if let Some((index, hit)) = block_hit {
        let removed = blocks.swap_remove(index);
        log::debug!("Block destroyed at ({}, {})", removed.pos.x, removed.pos.y);
        collision = hit;
        blocks_changed = true;
    }

    let paddle_hit = paddle.rect.collision_with(&moved);
    if paddle_hit.is_hit() {
        collision = paddle_hit;
    }

    let wall_hit = wall_collision(&moved, arena);
    if wall_hit.is_hit() {
        collision = wall_hit;
    }

    if collision.is_hit() {
        ball.rect.pos = new_pos + collision.penetration;
        ball.vel = reflect_velocity(ball.vel, collision.normal);
    } else {
        ball.rect.pos = new_pos;
    }

    blocks_changed
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) -> FrameOutcome {
    if let Some(dir) = input.direction() {
        state.paddle.move_horizontal(dir.sign(), dt);
    }

    if state.phase == GamePhase::Cleared && state.stop_when_cleared {
        return FrameOutcome::default();
    }

    let blocks_changed = update_ball(
        &mut state.ball,
        &mut state.blocks,
        &state.paddle,
        state.arena,
        dt,
    );

    let mut cleared = false;
    if blocks_changed {
        state.blocks_destroyed += 1;
        if state.blocks.is_empty() && state.phase == GamePhase::Playing {
            state.phase = GamePhase::Cleared;
            cleared = true;
            log::info!("Field cleared after {} blocks", state.blocks_destroyed);
        }
    }

    FrameOutcome {
        blocks_changed,
        cleared,
    }
}
