//! Breakout - a paddle, a ball and a wall of blocks
//!
//! Core modules:
//! - `sim`: Frame-by-frame simulation (AABB collision, ball physics, block field)
//! - `renderer`: Draw batching and the wgpu render pipeline
//! - `settings`: User-tunable values loaded from JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Arena dimensions. Shared by the wall checks and the projection.
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    /// Arena size as a vector
    pub const ARENA_SIZE: Vec2 = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT);

    /// Paddle defaults
    pub const PADDLE_START: Vec2 = Vec2::new(0.0, 100.0);
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 300.0;
    pub const PADDLE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    /// Ball defaults
    pub const BALL_START: Vec2 = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(-100.0, 200.0);
    pub const BALL_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

    /// Block grid defaults
    pub const GRID_COLUMNS: u32 = 5;
    pub const GRID_ROWS: u32 = 3;
    pub const BLOCK_WIDTH: f32 = 100.0;
    pub const BLOCK_HEIGHT: f32 = 45.0;
    pub const BLOCK_GAP_X: f32 = 5.0;
    pub const BLOCK_GAP_Y: f32 = 5.0;
    pub const GRID_START: Vec2 = Vec2::new(50.0, 300.0);

    /// Framebuffer clear color
    pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];
}
