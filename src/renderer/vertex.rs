//! Vertex type for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex position in a drawable's local space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_two_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 8);
        let verts = [Vertex::new(1.0, 2.0), Vertex::new(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
