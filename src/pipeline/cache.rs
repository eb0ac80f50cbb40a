//! Post-transform vertex cache

use std::collections::VecDeque;

use crate::geometry::ClipVertex;

/// Default number of shaded vertices kept between primitives
pub const DEFAULT_VERTEX_CACHE_SIZE: usize = 32;

/// Small FIFO cache of vertex shader results, keyed by vertex index.
///
/// Indexed meshes reference most vertices several times,
/// so neighboring primitives can skip re-running the vertex shader.
/// The cache must be reset between draw calls, since uniforms, shaders
/// or vertex buffers may have changed.
#[derive(Debug, Clone)]
pub struct VertexCache {
    capacity: usize,
    entries: VecDeque<(u32, ClipVertex)>,
}

impl Default for VertexCache {
    fn default() -> VertexCache {
        VertexCache::new(DEFAULT_VERTEX_CACHE_SIZE)
    }
}

impl VertexCache {
    /// Creates a cache holding up to `capacity` vertices. A capacity of zero disables caching.
    pub fn new(capacity: usize) -> VertexCache {
        VertexCache { capacity, entries: VecDeque::with_capacity(capacity) }
    }

    #[inline]
    pub fn capacity(&self) -> usize { self.capacity }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Changes the capacity, dropping the oldest entries if necessary
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;

        while self.entries.len() > capacity {
            self.entries.pop_front();
        }
    }

    /// Looks up a previously shaded vertex
    #[inline]
    pub fn get(&self, index: u32) -> Option<&ClipVertex> {
        self.entries.iter().find(|&&(i, _)| i == index).map(|&(_, ref vertex)| vertex)
    }

    /// Stores a shaded vertex, evicting the oldest one when full
    pub fn insert(&mut self, index: u32, vertex: ClipVertex) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }

        self.entries.push_back((index, vertex));
    }

    /// Forgets all cached vertices
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
