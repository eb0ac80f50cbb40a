use super::Dimensions;

/// Integer pixel coordinate, with `y` counting rows of the render target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Row-major index of the coordinate within a buffer of the given dimensions
    #[inline]
    pub fn into_index(self, dimensions: Dimensions) -> usize {
        let Coordinate { x, y } = self;
        y as usize * dimensions.width as usize + x as usize
    }

    /// Window-space position of the pixel center
    #[inline]
    pub fn center(self) -> (f32, f32) {
        (self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}
