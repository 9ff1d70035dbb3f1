//! Drawable capability shared by everything on screen

use glam::{Mat4, Vec3};

use super::vertex::Vertex;
use crate::sim::{Ball, GameState, Paddle, Rect};

/// Anything the draw batch can render
pub trait Drawable {
    /// Triangle list in local space
    fn vertices(&self) -> Vec<Vertex>;
    /// Local space to arena space
    fn transform(&self) -> Mat4;
    /// RGBA fill color
    fn color(&self) -> [f32; 4];

    fn vertex_count(&self) -> u32 {
        self.vertices().len() as u32
    }
}

/// Two triangles covering `[0, width] x [0, height]`
pub fn rect_vertices(width: f32, height: f32) -> [Vertex; 6] {
    [
        Vertex::new(0.0, 0.0),
        Vertex::new(0.0, height),
        Vertex::new(width, 0.0),
        Vertex::new(0.0, height),
        Vertex::new(width, height),
        Vertex::new(width, 0.0),
    ]
}

impl Drawable for Rect {
    fn vertices(&self) -> Vec<Vertex> {
        rect_vertices(self.width, self.height).to_vec()
    }

    fn transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.pos.x, self.pos.y, 0.0))
    }

    fn color(&self) -> [f32; 4] {
        self.color
    }

    fn vertex_count(&self) -> u32 {
        6
    }
}

impl Drawable for Ball {
    fn vertices(&self) -> Vec<Vertex> {
        self.rect.vertices()
    }

    fn transform(&self) -> Mat4 {
        self.rect.transform()
    }

    fn color(&self) -> [f32; 4] {
        self.rect.color
    }

    fn vertex_count(&self) -> u32 {
        self.rect.vertex_count()
    }
}

impl Drawable for Paddle {
    fn vertices(&self) -> Vec<Vertex> {
        self.rect.vertices()
    }

    fn transform(&self) -> Mat4 {
        self.rect.transform()
    }

    fn color(&self) -> [f32; 4] {
        self.rect.color
    }

    fn vertex_count(&self) -> u32 {
        self.rect.vertex_count()
    }
}

/// Everything to draw, in draw order: paddle, ball, then the blocks
pub fn scene(state: &GameState) -> Vec<&dyn Drawable> {
    let mut drawables: Vec<&dyn Drawable> = Vec::with_capacity(state.blocks.len() + 2);
    drawables.push(&state.paddle);
    drawables.push(&state.ball);
    drawables.extend(state.blocks.iter().map(|b| b as &dyn Drawable));
    drawables
}
