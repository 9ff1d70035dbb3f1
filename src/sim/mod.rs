//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the GPU
//! or the window, and no operation can fail:
//! - Axis-aligned rectangles only
//! - One physics step per rendered frame
//! - Collision priority: block < paddle < wall

pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Collision, reflect_velocity, resolve, wall_collision};
pub use layout::{GridLayout, block_color, build_field};
pub use rect::Rect;
pub use state::{Ball, BlockField, GamePhase, GameState, Paddle};
pub use tick::{FrameInput, FrameOutcome, HorizontalDir, tick, update_ball};
