//! Helpers shared by the end-to-end tests

#![allow(dead_code)]

use nalgebra::Vector4;

use softraster::{Attributes, ClipVertex, Varyings, VertexAttribute, POSITION_ATTRIBUTE};

pub const SIZE: u32 = 4;

/// Packs homogeneous positions into a little-endian float buffer
pub fn position_buffer(positions: &[[f32; 4]]) -> Vec<u8> {
    positions.iter().flat_map(|p| p.iter()).flat_map(|c| c.to_le_bytes().to_vec()).collect()
}

pub fn position_attribute() -> VertexAttribute {
    VertexAttribute::float(4, 0, 0).unwrap()
}

/// Vertex shader passing the position through, with the position also as the only varying
pub fn passthrough(_: &(), attributes: &Attributes) -> ClipVertex {
    let position = attributes[POSITION_ATTRIBUTE];

    ClipVertex::new(position, Varyings::from_slice(&[position]))
}

pub fn white(_: &(), _: &Vector4<f32>, _: &Varyings) -> Vector4<f32> {
    Vector4::new(1.0, 1.0, 1.0, 1.0)
}

/// Coordinates of every pixel with a non-zero alpha, row by row
pub fn lit_pixels(color: &[u8], width: u32) -> Vec<(u32, u32)> {
    color.chunks(4).enumerate()
         .filter(|&(_, pixel)| pixel[3] != 0)
         .map(|(i, _)| (i as u32 % width, i as u32 / width))
         .collect()
}
