use super::Coordinate;

/// Defines types with set dimensions
pub trait HasDimensions {
    /// Returns the dimensions of the object
    fn dimensions(&self) -> Dimensions;

    /// Checks if the given coordinate is within the dimension bounds of the current object
    #[inline]
    fn in_bounds(&self, coord: Coordinate) -> bool {
        self.dimensions().in_bounds(coord)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[inline(always)]
    pub fn new(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    /// Returns the number of pixels as `usize` by multiplying the current width and height
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks if the given coordinate is within the dimension bounds
    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Rectangle covering every pixel
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Half-open pixel rectangle, `min` inclusive and `max` exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Rect {
    #[inline]
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Rect {
        Rect { min: Coordinate::new(x0, y0), max: Coordinate::new(x1, y1) }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.min.x as i64 && x < self.max.x as i64 &&
            y >= self.min.y as i64 && y < self.max.y as i64
    }

    /// Overlap of two rectangles, or `None` if they are disjoint
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let rect = Rect::new(self.min.x.max(other.min.x),
                             self.min.y.max(other.min.y),
                             self.max.x.min(other.max.x),
                             self.max.y.min(other.max.y));

        if rect.is_empty() { None } else { Some(rect) }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 1, 8, 3);

        assert_eq!(a.intersect(&b), Some(Rect::new(2, 1, 4, 3)));
        assert_eq!(a.intersect(&Rect::new(4, 0, 6, 4)), None);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(1, 1, 3, 3);

        assert!(r.contains(1, 1));
        assert!(r.contains(2, 2));
        assert!(!r.contains(3, 2));
        assert!(!r.contains(0, 1));
        assert!(!r.contains(-1, -1));
    }
}
