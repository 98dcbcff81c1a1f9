//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with screen-space position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes per vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Raw bytes of a vertex list, ready for a GPU or file upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// 8-bit RGB to a normalized RGBA color
pub fn rgb(c: [u8; 3]) -> [f32; 4] {
    [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0, 1.0]
}

/// Colors for scene elements
pub mod colors {
    pub const ROAD: [f32; 4] = [50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0];
    pub const ROAD_EDGE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const MARKING_DAY: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const MARKING_NIGHT: [f32; 4] = [1.0, 1.0, 200.0 / 255.0, 1.0];
    pub const WINDOW: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const HEADLIGHT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const TAILLIGHT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
