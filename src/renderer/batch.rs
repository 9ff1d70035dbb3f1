//! Per-scene draw batch
//!
//! `rebuild` concatenates every drawable's vertices into one buffer and
//! records the vertex range each one occupies. `draw_calls` must be given
//! the drawables in the same order, or transforms and colors land on the
//! wrong geometry.

use std::ops::Range;

use glam::Mat4;

use super::drawable::Drawable;
use super::vertex::Vertex;

/// One draw call: a vertex range plus the uniforms set just before it
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub vertices: Range<u32>,
    pub transform: Mat4,
    pub color: [f32; 4],
}

/// Concatenated vertex data for a list of drawables
#[derive(Debug, Clone, Default)]
pub struct DrawBatch {
    vertices: Vec<Vertex>,
    ranges: Vec<Range<u32>>,
}

impl DrawBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_drawables(drawables: &[&dyn Drawable]) -> Self {
        let mut batch = Self::new();
        batch.rebuild(drawables);
        batch
    }

    /// Recompute vertices and ranges from scratch
    pub fn rebuild(&mut self, drawables: &[&dyn Drawable]) {
        self.vertices.clear();
        self.ranges.clear();

        let mut offset = 0u32;
        for drawable in drawables {
            let verts = drawable.vertices();
            let end = offset + verts.len() as u32;
            self.vertices.extend_from_slice(&verts);
            self.ranges.push(offset..end);
            offset = end;
        }

        log::debug!(
            "Rebuilt draw batch: {} drawables, {} vertices",
            self.ranges.len(),
            self.vertices.len()
        );
    }

    /// The contiguous vertex buffer contents
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex range of each drawable, in build order
    pub fn ranges(&self) -> &[Range<u32>] {
        &self.ranges
    }

    /// Number of drawables in the batch
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Whether `drawables` still lines up with the recorded ranges
    pub fn is_in_sync(&self, drawables: &[&dyn Drawable]) -> bool {
        drawables.len() == self.ranges.len()
            && drawables
                .iter()
                .zip(&self.ranges)
                .all(|(d, r)| d.vertex_count() == r.end - r.start)
    }

    /// Pair each recorded range with the drawable's current transform and color
    pub fn draw_calls(&self, drawables: &[&dyn Drawable]) -> Vec<DrawCall> {
        debug_assert!(
            self.is_in_sync(drawables),
            "draw batch out of sync with drawables"
        );
        self.ranges
            .iter()
            .zip(drawables)
            .map(|(range, d)| DrawCall {
                vertices: range.clone(),
                transform: d.transform(),
                color: d.color(),
            })
            .collect()
    }
}
