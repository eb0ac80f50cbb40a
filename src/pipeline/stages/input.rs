//! Input assembly and vertex fetch

use nalgebra::Vector4;

use crate::error::{RenderError, RenderResult};
use crate::primitive::Topology;

/// Number of vertex attribute slots
pub const MAX_VERTEX_ATTRIBUTES: usize = 16;

/// Attribute slot conventionally holding the vertex position.
///
/// When disabled it defaults to `(0, 0, 0, 1)` rather than zero.
pub const POSITION_ATTRIBUTE: usize = 0;

/// Every attribute of a single vertex, as given to the vertex shader
pub type Attributes = [Vector4<f32>; MAX_VERTEX_ATTRIBUTES];

/// Storage format of a single attribute component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentFormat {
    /// Little-endian 32-bit float
    Float32,
    /// Unsigned byte, optionally normalized to `[0, 1]`
    UnsignedByte,
}

impl ComponentFormat {
    /// Size of one component in bytes
    #[inline]
    pub fn size(self) -> usize {
        match self {
            ComponentFormat::Float32 => 4,
            ComponentFormat::UnsignedByte => 1,
        }
    }
}

/// Describes where one attribute lives in a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    components: u8,
    format: ComponentFormat,
    normalized: bool,
    stride: usize,
    offset: usize,
}

impl VertexAttribute {
    /// Creates an attribute of 1 to 4 components, starting `offset` bytes into the buffer
    /// with consecutive vertices `stride` bytes apart.
    ///
    /// A stride of zero means tightly packed vertices. `normalized` only affects `UnsignedByte` components.
    pub fn new(components: u8, format: ComponentFormat, normalized: bool, stride: usize, offset: usize) -> RenderResult<VertexAttribute> {
        if components < 1 || components > 4 {
            return Err(RenderError::InvalidComponentCount(components));
        }

        Ok(VertexAttribute { components, format, normalized, stride, offset })
    }

    /// Shorthand for a `Float32` attribute
    pub fn float(components: u8, stride: usize, offset: usize) -> RenderResult<VertexAttribute> {
        VertexAttribute::new(components, ComponentFormat::Float32, false, stride, offset)
    }

    #[inline]
    pub fn components(&self) -> u8 { self.components }

    #[inline]
    pub fn format(&self) -> ComponentFormat { self.format }

    #[inline]
    pub fn normalized(&self) -> bool { self.normalized }

    #[inline]
    pub fn offset(&self) -> usize { self.offset }

    /// Size of the attribute in bytes
    #[inline]
    pub fn size(&self) -> usize {
        self.components as usize * self.format.size()
    }

    /// Effective distance between consecutive vertices
    #[inline]
    pub fn stride(&self) -> usize {
        if self.stride == 0 { self.size() } else { self.stride }
    }

    /// Reads the attribute of vertex `index` from `buffer`.
    ///
    /// Missing components default to `(0, 0, 0, 1)`.
    /// Returns `None` if the attribute would extend past the end of the buffer.
    pub fn fetch(&self, buffer: &[u8], index: u32) -> Option<Vector4<f32>> {
        let start = (index as usize).checked_mul(self.stride())?.checked_add(self.offset)?;
        let end = start.checked_add(self.size())?;

        let bytes = buffer.get(start..end)?;

        let mut value = Vector4::new(0.0, 0.0, 0.0, 1.0);

        for c in 0..self.components as usize {
            value[c] = match self.format {
                ComponentFormat::Float32 => {
                    let o = c * 4;
                    f32::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]])
                }
                ComponentFormat::UnsignedByte if self.normalized => bytes[c] as f32 / 255.0,
                ComponentFormat::UnsignedByte => bytes[c] as f32,
            };
        }

        Some(value)
    }
}

/// Attribute descriptions for every slot, with a bitmask of enabled slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputLayout {
    attributes: [Option<VertexAttribute>; MAX_VERTEX_ATTRIBUTES],
    enabled: u16,
}

#[inline]
fn check_slot(slot: usize) -> RenderResult<()> {
    if slot < MAX_VERTEX_ATTRIBUTES { Ok(()) } else { Err(RenderError::AttributeIndexOutOfRange(slot)) }
}

impl InputLayout {
    pub fn new() -> InputLayout { InputLayout::default() }

    /// Describes and enables an attribute slot
    pub fn set_attribute(&mut self, slot: usize, attribute: VertexAttribute) -> RenderResult<()> {
        check_slot(slot)?;

        self.attributes[slot] = Some(attribute);
        self.enabled |= 1 << slot;

        Ok(())
    }

    /// Enables or disables a slot. Slots without a description can't be enabled.
    pub fn set_enabled(&mut self, slot: usize, enabled: bool) -> RenderResult<()> {
        check_slot(slot)?;

        if enabled && self.attributes[slot].is_some() {
            self.enabled |= 1 << slot;
        } else {
            self.enabled &= !(1 << slot);
        }

        Ok(())
    }

    #[inline]
    pub fn is_enabled(&self, slot: usize) -> bool {
        slot < MAX_VERTEX_ATTRIBUTES && self.enabled & (1 << slot) != 0
    }

    /// Bitmask of enabled slots, bit `n` for slot `n`
    #[inline]
    pub fn enabled_mask(&self) -> u16 { self.enabled }

    /// The attribute of an enabled slot
    #[inline]
    pub fn attribute(&self, slot: usize) -> Option<&VertexAttribute> {
        if self.is_enabled(slot) { self.attributes[slot].as_ref() } else { None }
    }

    /// Iterates over the indices of enabled slots
    pub fn enabled_slots<'s>(&'s self) -> impl Iterator<Item = usize> + 's {
        (0..MAX_VERTEX_ATTRIBUTES).filter(move |&slot| self.is_enabled(slot))
    }
}

/// Checks that vertex `max_index` can be fetched from every enabled slot.
///
/// An attribute ends further into its buffer the larger the index, so this covers every index up to it.
pub fn check_vertex_range(layout: &InputLayout,
                          buffers: &[Option<&[u8]>; MAX_VERTEX_ATTRIBUTES],
                          max_index: u32) -> RenderResult<()> {
    fetch_attributes(layout, buffers, max_index).map(|_| ())
}

/// Values of disabled attribute slots
pub fn default_attributes() -> Attributes {
    let mut attributes = [Vector4::zeros(); MAX_VERTEX_ATTRIBUTES];
    attributes[POSITION_ATTRIBUTE] = Vector4::new(0.0, 0.0, 0.0, 1.0);
    attributes
}

/// Gathers all attributes of vertex `index` from the buffers bound to each enabled slot.
pub fn fetch_attributes(layout: &InputLayout,
                        buffers: &[Option<&[u8]>; MAX_VERTEX_ATTRIBUTES],
                        index: u32) -> RenderResult<Attributes> {
    let mut attributes = default_attributes();

    for slot in layout.enabled_slots() {
        if let Some(attribute) = layout.attribute(slot) {
            let buffer = buffers[slot].ok_or(RenderError::MissingVertexBuffer { slot })?;

            attributes[slot] = attribute.fetch(buffer, index).ok_or(RenderError::VertexOutOfRange { slot, index })?;
        }
    }

    Ok(attributes)
}

/// Borrowed index buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBuffer<'a> {
    U16(&'a [u16]),
    U32(&'a [u32]),
}

impl<'a> IndexBuffer<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        match *self {
            IndexBuffer::U16(indices) => indices.len(),
            IndexBuffer::U32(indices) => indices.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[inline]
    pub fn get(&self, i: usize) -> Option<u32> {
        match *self {
            IndexBuffer::U16(indices) => indices.get(i).map(|&index| index as u32),
            IndexBuffer::U32(indices) => indices.get(i).cloned(),
        }
    }
}

impl<'a> From<&'a [u16]> for IndexBuffer<'a> {
    fn from(indices: &'a [u16]) -> IndexBuffer<'a> { IndexBuffer::U16(indices) }
}

impl<'a> From<&'a [u32]> for IndexBuffer<'a> {
    fn from(indices: &'a [u32]) -> IndexBuffer<'a> { IndexBuffer::U32(indices) }
}

/// Vertex indices of one primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveIndices {
    indices: [u32; 3],
    len: usize,
}

impl PrimitiveIndices {
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.indices[..self.len]
    }
}

impl ::std::ops::Deref for PrimitiveIndices {
    type Target = [u32];

    #[inline]
    fn deref(&self) -> &[u32] { self.as_slice() }
}

/// Walks an index buffer, grouping indices into primitives according to a topology.
///
/// Iteration stops as soon as fewer indices remain than one more primitive needs,
/// so trailing indices are ignored.
pub struct InputAssembler<'a> {
    indices: IndexBuffer<'a>,
    topology: Topology,
    primitive: usize,
}

impl<'a> InputAssembler<'a> {
    pub fn new(indices: IndexBuffer<'a>, topology: Topology) -> InputAssembler<'a> {
        InputAssembler { indices, topology, primitive: 0 }
    }

    #[inline]
    pub fn topology(&self) -> Topology { self.topology }
}

impl<'a> Iterator for InputAssembler<'a> {
    type Item = PrimitiveIndices;

    fn next(&mut self) -> Option<PrimitiveIndices> {
        let i = self.primitive;

        // Positions within the index buffer
        let (positions, len) = match self.topology {
            Topology::LineList => ([2 * i, 2 * i + 1, 0], 2),
            Topology::LineStrip => ([i, i + 1, 0], 2),
            Topology::TriangleList => ([3 * i, 3 * i + 1, 3 * i + 2], 3),
            // Swap odd triangles to keep the winding of the first
            Topology::TriangleStrip if i % 2 == 1 => ([i + 1, i, i + 2], 3),
            Topology::TriangleStrip => ([i, i + 1, i + 2], 3),
            Topology::TriangleFan => ([0, i + 1, i + 2], 3),
        };

        let mut indices = [0; 3];

        for (index, &position) in indices.iter_mut().zip(&positions[..len]) {
            *index = self.indices.get(position)?;
        }

        self.primitive += 1;

        Some(PrimitiveIndices { indices, len })
    }
}
