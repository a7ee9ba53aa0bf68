//! Vertex type for the host renderer

use bytemuck::{Pod, Zeroable};

/// 2D court-space vertex with an 8-bit RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [u8; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [u8; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// 0xRRGGBBAA to bytes
    const fn hex(rgba: u32) -> [u8; 4] {
        rgba.to_be_bytes()
    }

    pub const BACKGROUND: [u8; 4] = hex(0xb4bfb0ff);
    pub const WALL: [u8; 4] = hex(0x2c1320ff);
    pub const SHADOW: [u8; 4] = hex(0x604d29ff);
    pub const PADDLE: [u8; 4] = hex(0x2c1320ff);
    pub const SNAKE: [u8; 4] = hex(0x6f9283ff);
    pub const GREEN_FRUIT: [u8; 4] = hex(0x188b2dff);
    pub const RED_FRUIT: [u8; 4] = hex(0xc54630ff);
    pub const LIFE: [u8; 4] = hex(0xc54630ff);
}
