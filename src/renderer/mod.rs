//! Rendering module
//!
//! Every drawable is a short triangle list in its own local space. The
//! whole scene lives in one vertex buffer; each drawable gets one draw call
//! with its own transform and color.

pub mod batch;
pub mod drawable;
pub mod pipeline;
pub mod vertex;

pub use batch::{DrawBatch, DrawCall};
pub use drawable::{Drawable, rect_vertices, scene};
pub use pipeline::RenderState;
pub use vertex::Vertex;
