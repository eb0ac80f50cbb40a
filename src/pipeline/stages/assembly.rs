//! Primitive re-assembly of clipped polygons

use crate::primitive::{AssembledPrimitive, PrimitiveType};

/// Splits a clipped polygon back into primitives.
///
/// Triangles are re-assembled as a fan around the first vertex,
/// which keeps the winding of the convex polygon. Lines come out whole if both endpoints survived.
///
/// Only indices into the polygon are produced, vertices are never copied.
#[derive(Debug, Clone)]
pub struct FanAssembly {
    primitive: PrimitiveType,
    count: usize,
    next: usize,
}

impl FanAssembly {
    pub fn new(primitive: PrimitiveType, count: usize) -> FanAssembly {
        FanAssembly { primitive, count, next: 0 }
    }

    /// Restarts iteration from the first primitive
    #[inline]
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Total number of primitives produced
    pub fn total(&self) -> usize {
        match self.primitive {
            PrimitiveType::Line => if self.count == 2 { 1 } else { 0 },
            PrimitiveType::Triangle => self.count.saturating_sub(2),
        }
    }
}

impl Iterator for FanAssembly {
    type Item = AssembledPrimitive;

    fn next(&mut self) -> Option<AssembledPrimitive> {
        if self.next >= self.total() {
            return None;
        }

        let i = self.next;
        self.next += 1;

        Some(match self.primitive {
            PrimitiveType::Line => AssembledPrimitive::Line([0, 1]),
            PrimitiveType::Triangle => AssembledPrimitive::Triangle([0, i + 1, i + 2]),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FanAssembly {}
