//! Output merger stage

use crate::framebuffer::{Color, RenderTarget};
use crate::geometry::{Coordinate, HasDimensions};
use crate::pipeline::state::DepthState;

/// Depth tests a shaded fragment and writes it to the render target.
///
/// The incoming depth is first rounded to what the depth buffer can store, so equal depths
/// compare equal. Without a depth buffer, or with depth testing disabled, every fragment passes
/// and no depth is written.
///
/// Returns true if the fragment passed and was written. Fragments outside the target are dropped.
pub fn merge(target: &mut RenderTarget, state: &DepthState, coord: Coordinate, depth: f32, color: &Color) -> bool {
    if !target.in_bounds(coord) {
        return false;
    }

    let Coordinate { x, y } = coord;

    if state.test_enabled {
        if let Some(ref mut depth_buffer) = target.depth {
            let stored = match depth_buffer.get_depth(x, y) {
                Some(stored) => stored,
                None => return false,
            };

            let incoming = depth_buffer.format().quantize(depth);

            if !state.func.test(incoming, stored) {
                return false;
            }

            if state.write_enabled {
                depth_buffer.set_depth(x, y, incoming);
            }
        }
    }

    target.color.set_pixel(x, y, color);

    true
}
