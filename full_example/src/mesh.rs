//! Procedural cube mesh

use nalgebra::{Vector2, Vector3};

use softraster::{RenderResult, VertexAttribute};

/// Bytes per interleaved vertex: position, normal and uv
pub const VERTEX_STRIDE: usize = (3 + 3 + 2) * 4;

pub const POSITION: usize = 0;
pub const NORMAL: usize = 1;
pub const UV: usize = 2;

pub struct Mesh {
    /// Interleaved little-endian vertex data
    pub vertices: Vec<u8>,
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Attribute layout of `vertices`, as `(slot, attribute)` pairs
    pub fn attributes() -> RenderResult<[(usize, VertexAttribute); 3]> {
        Ok([
            (POSITION, VertexAttribute::float(3, VERTEX_STRIDE, 0)?),
            (NORMAL, VertexAttribute::float(3, VERTEX_STRIDE, 12)?),
            (UV, VertexAttribute::float(2, VERTEX_STRIDE, 24)?),
        ])
    }
}

fn push_vertex(vertices: &mut Vec<u8>, position: Vector3<f32>, normal: Vector3<f32>, uv: Vector2<f32>) {
    for c in position.iter().chain(normal.iter()).chain(uv.iter()) {
        vertices.extend_from_slice(&c.to_le_bytes());
    }
}

/// Unit cube centered on the origin, with counter-clockwise faces seen from outside
pub fn cube() -> Mesh {
    let mut vertices = Vec::with_capacity(24 * VERTEX_STRIDE);
    let mut indices = Vec::with_capacity(36);

    let axes = [Vector3::x(), Vector3::y(), Vector3::z()];

    for (i, axis) in axes.iter().enumerate() {
        // The two axes spanning the face, ordered so that u x v points along the normal
        let u = axes[(i + 1) % 3];
        let v = axes[(i + 2) % 3];

        for &sign in &[1.0f32, -1.0] {
            let normal = axis * sign;
            let (u, v) = if sign > 0.0 { (u, v) } else { (v, u) };

            let base = (vertices.len() / VERTEX_STRIDE) as u16;

            for &(s, t) in &[(0.0f32, 0.0f32), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
                let position = (normal + u * (s * 2.0 - 1.0) + v * (t * 2.0 - 1.0)) * 0.5;

                push_vertex(&mut vertices, position, normal, Vector2::new(s, t));
            }

            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    Mesh { vertices, indices }
}

/// RGBA checkerboard texture of `size` by `size` texels
pub fn checkerboard(size: u32, squares: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let dark = ((x * squares / size) + (y * squares / size)) % 2 == 0;

            let texel: [u8; 4] = if dark { [60, 90, 160, 255] } else { [230, 230, 230, 255] };

            data.extend_from_slice(&texel);
        }
    }

    data
}
