//! The rendering pipeline
//!
//! A draw call runs every primitive through the stages in order:
//! input assembly, vertex shading, clipping, fan re-assembly, rasterization,
//! fragment shading and finally the depth test and output merge.

use smallvec::SmallVec;

use crate::error::{RenderError, RenderResult};
use crate::framebuffer::{Color, RenderTarget};
use crate::geometry::{ClipVertex, DepthRange, HasDimensions, Rect, ScreenVertex, Viewport};
use crate::primitive::{AssembledPrimitive, Topology};

pub mod state;
pub mod cache;
pub mod stages;

pub use self::state::{CullMode, DepthFunc, DepthState, RasterizerState};
pub use self::cache::{VertexCache, DEFAULT_VERTEX_CACHE_SIZE};
pub use self::stages::{VertexShader, FragmentShader, FragmentOutput};
pub use self::stages::input::{Attributes, ComponentFormat, IndexBuffer, InputLayout, VertexAttribute,
                              MAX_VERTEX_ATTRIBUTES, POSITION_ATTRIBUTE};
pub use self::stages::clip::{clip_polygon, ClippedPolygon, MAX_CLIPPED_VERTICES};
pub use self::stages::rasterization::{Fragment, Quad, RasterOutcome};

use self::stages::input::{check_vertex_range, InputAssembler};
use self::stages::vertex::VertexStage;
use self::stages::clip::clip_primitive;
use self::stages::assembly::FanAssembly;
use self::stages::rasterization::{rasterize_line, rasterize_triangle, RasterArguments};
use self::stages::output;

/// Counters collected during a single draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    /// Primitives produced by input assembly
    pub primitives: usize,
    /// Primitives completely outside the view volume
    pub clipped: usize,
    /// Triangles discarded by face culling, counted once per input primitive
    pub culled: usize,
    /// Zero-area triangles, zero-length lines and primitives with a `w = 0` vertex,
    /// counted once per input primitive
    pub degenerate: usize,
    /// Covered fragments given to the fragment shader
    pub fragments_shaded: usize,
    /// Fragments discarded by the fragment shader
    pub fragments_discarded: usize,
    /// Fragments that passed the depth test and were written
    pub fragments_passed: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

/// Holds all pipeline state and drives draw calls.
///
/// Buffers are borrowed for `'a` and never owned, so the render target can be read back
/// once the context is dropped, or through `render_target` while it is still alive.
///
/// ```ignore
/// let mut context = RenderingContext::new(uniforms);
///
/// context.set_vertex_shader(|uniforms: &Uniforms, attributes: &Attributes| { ... });
/// context.set_fragment_shader(|uniforms: &Uniforms, frag_coord: &Vector4<f32>, varyings: &Varyings| { ... });
/// context.set_vertex_attribute(0, VertexAttribute::float(3, 0, 0)?)?;
/// context.set_vertex_buffer(0, &positions)?;
/// context.set_index_buffer(IndexBuffer::U16(&indices));
/// context.set_render_target(RenderTarget::with_depth(color, depth)?);
///
/// let stats = context.draw_indexed(Topology::TriangleList)?;
/// ```
pub struct RenderingContext<'a, U> {
    uniforms: U,
    vertex_shader: Option<Box<dyn VertexShader<U> + 'a>>,
    fragment_shader: Option<Box<dyn FragmentShader<U> + 'a>>,
    input_layout: InputLayout,
    vertex_buffers: [Option<&'a [u8]>; MAX_VERTEX_ATTRIBUTES],
    index_buffer: Option<IndexBuffer<'a>>,
    render_target: Option<RenderTarget<'a>>,
    viewport: Option<Viewport>,
    depth_range: DepthRange,
    rasterizer: RasterizerState,
    depth: DepthState,
    cache: VertexCache,
}

impl<'a, U> RenderingContext<'a, U> {
    /// Creates a context with default state and nothing bound
    pub fn new(uniforms: U) -> RenderingContext<'a, U> {
        RenderingContext {
            uniforms,
            vertex_shader: None,
            fragment_shader: None,
            input_layout: InputLayout::default(),
            vertex_buffers: [None; MAX_VERTEX_ATTRIBUTES],
            index_buffer: None,
            render_target: None,
            viewport: None,
            depth_range: DepthRange::default(),
            rasterizer: RasterizerState::default(),
            depth: DepthState::default(),
            cache: VertexCache::default(),
        }
    }

    /// Returns a reference to the uniforms value
    #[inline]
    pub fn uniforms(&self) -> &U { &self.uniforms }

    /// Returns a mutable reference to the uniforms value
    #[inline]
    pub fn uniforms_mut(&mut self) -> &mut U { &mut self.uniforms }

    pub fn set_vertex_shader<S>(&mut self, shader: S) where S: VertexShader<U> + 'a {
        self.vertex_shader = Some(Box::new(shader));
    }

    pub fn set_fragment_shader<S>(&mut self, shader: S) where S: FragmentShader<U> + 'a {
        self.fragment_shader = Some(Box::new(shader));
    }

    #[inline]
    pub fn input_layout(&self) -> &InputLayout { &self.input_layout }

    pub fn set_input_layout(&mut self, layout: InputLayout) {
        self.input_layout = layout;
    }

    /// Describes and enables an attribute slot
    pub fn set_vertex_attribute(&mut self, slot: usize, attribute: VertexAttribute) -> RenderResult<()> {
        self.input_layout.set_attribute(slot, attribute)
    }

    pub fn set_attribute_enabled(&mut self, slot: usize, enabled: bool) -> RenderResult<()> {
        self.input_layout.set_enabled(slot, enabled)
    }

    /// Binds the vertex buffer an attribute slot reads from.
    ///
    /// Several slots may share one interleaved buffer.
    pub fn set_vertex_buffer(&mut self, slot: usize, buffer: &'a [u8]) -> RenderResult<()> {
        if slot >= MAX_VERTEX_ATTRIBUTES {
            return Err(RenderError::AttributeIndexOutOfRange(slot));
        }

        self.vertex_buffers[slot] = Some(buffer);

        Ok(())
    }

    pub fn set_index_buffer<I>(&mut self, indices: I) where I: Into<IndexBuffer<'a>> {
        self.index_buffer = Some(indices.into());
    }

    pub fn set_render_target(&mut self, target: RenderTarget<'a>) {
        self.render_target = Some(target);
    }

    #[inline]
    pub fn render_target(&self) -> Option<&RenderTarget<'a>> { self.render_target.as_ref() }

    #[inline]
    pub fn render_target_mut(&mut self) -> Option<&mut RenderTarget<'a>> { self.render_target.as_mut() }

    /// Unbinds and returns the render target
    pub fn take_render_target(&mut self) -> Option<RenderTarget<'a>> {
        self.render_target.take()
    }

    /// Sets the viewport. Without one, the viewport covers the whole render target.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    pub fn set_depth_range(&mut self, depth_range: DepthRange) {
        self.depth_range = depth_range;
    }

    pub fn set_rasterizer_state(&mut self, state: RasterizerState) {
        self.rasterizer = state;
    }

    #[inline]
    pub fn rasterizer_state(&self) -> &RasterizerState { &self.rasterizer }

    pub fn set_depth_state(&mut self, state: DepthState) {
        self.depth = state;
    }

    #[inline]
    pub fn depth_state(&self) -> &DepthState { &self.depth }

    /// Number of shaded vertices reused between primitives. Zero disables the cache.
    pub fn set_vertex_cache_size(&mut self, size: usize) {
        self.cache.set_capacity(size);
    }

    /// Fills the color buffer of the render target
    pub fn clear_color(&mut self, color: &Color) -> RenderResult<()> {
        let target = self.render_target.as_mut().ok_or(RenderError::MissingRenderTarget)?;

        target.color.clear(color);

        Ok(())
    }

    /// Fills the depth buffer of the render target, if it has one
    pub fn clear_depth(&mut self, depth: f32) -> RenderResult<()> {
        let target = self.render_target.as_mut().ok_or(RenderError::MissingRenderTarget)?;

        if let Some(ref mut buffer) = target.depth {
            buffer.clear(depth);
        }

        Ok(())
    }

    /// Draws the bound index buffer as primitives of the given topology.
    ///
    /// All bound state is validated before anything is drawn, including that every
    /// referenced vertex lies within the buffers of the enabled attribute slots.
    pub fn draw_indexed(&mut self, topology: Topology) -> RenderResult<DrawStats> {
        let vertex_shader = self.vertex_shader.as_ref().ok_or(RenderError::MissingVertexShader)?;
        let fragment_shader = self.fragment_shader.as_ref().ok_or(RenderError::MissingFragmentShader)?;
        let indices = self.index_buffer.ok_or(RenderError::MissingIndexBuffer)?;
        let target = self.render_target.as_mut().ok_or(RenderError::MissingRenderTarget)?;

        for slot in self.input_layout.enabled_slots() {
            if self.vertex_buffers[slot].is_none() {
                return Err(RenderError::MissingVertexBuffer { slot });
            }
        }

        let max_index = InputAssembler::new(indices, topology).fold(None, |max, primitive| {
            primitive.iter().cloned().max().max(max)
        });

        if let Some(index) = max_index {
            check_vertex_range(&self.input_layout, &self.vertex_buffers, index)?;
        }

        let dimensions = target.dimensions();

        let viewport = self.viewport.unwrap_or_else(|| Viewport::with_size(dimensions.width, dimensions.height));

        let scissor = self.rasterizer.scissor;

        let clip_rect = viewport.rect()
                                .and_then(|rect| rect.intersect(&dimensions.rect()))
                                .and_then(|rect| match scissor {
                                    Some(ref scissor) => rect.intersect(scissor),
                                    None => Some(rect),
                                })
                                .unwrap_or(Rect::new(0, 0, 0, 0));

        let args = RasterArguments {
            clip_rect,
            cull_mode: self.rasterizer.cull_mode,
            front_face: self.rasterizer.front_face,
        };

        let vertex_stage = VertexStage {
            shader: &**vertex_shader,
            uniforms: &self.uniforms,
            layout: &self.input_layout,
            buffers: &self.vertex_buffers,
        };

        let uniforms = &self.uniforms;
        let depth_state = self.depth;
        let depth_range = self.depth_range;
        let primitive_type = topology.primitive_type();

        self.cache.reset();

        let mut stats = DrawStats::default();

        {
            let mut fragments_shaded = 0;
            let mut fragments_discarded = 0;
            let mut fragments_passed = 0;

            let mut emit = |quad: &Quad| {
                for fragment in quad.iter().filter(|fragment| fragment.covered) {
                    fragments_shaded += 1;

                    match fragment_shader.shade(uniforms, &fragment.frag_coord, &fragment.varyings) {
                        FragmentOutput::Discard => fragments_discarded += 1,
                        FragmentOutput::Color(color) => {
                            if output::merge(target, &depth_state, fragment.coord, fragment.frag_coord.z, &color) {
                                fragments_passed += 1;
                            }
                        }
                    }
                }
            };

            for primitive in InputAssembler::new(indices, topology) {
                stats.primitives += 1;

                let mut shaded: SmallVec<[ClipVertex; 3]> = SmallVec::new();

                for &index in primitive.iter() {
                    let (vertex, hit) = vertex_stage.run(&mut self.cache, index)?;

                    if hit { stats.cache_hits += 1; } else { stats.cache_misses += 1; }

                    shaded.push(vertex);
                }

                let polygon = clip_primitive(&shaded, primitive_type)?;

                if polygon.is_empty() {
                    trace!("Primitive {} ({:?}) is outside the view volume", stats.primitives - 1, primitive.as_slice());
                    stats.clipped += 1;
                    continue;
                }

                let screen: Option<SmallVec<[ScreenVertex; MAX_CLIPPED_VERTICES]>> = polygon.iter().map(|vertex| {
                    ScreenVertex::from_clip(vertex, &viewport, &depth_range)
                }).collect();

                let screen = match screen {
                    Some(screen) => screen,
                    None => {
                        trace!("Primitive {} ({:?}) has a vertex with w = 0", stats.primitives - 1, primitive.as_slice());
                        stats.degenerate += 1;
                        continue;
                    }
                };

                // Sub-triangles of one polygon share its winding, so the primitive is only
                // counted as culled or degenerate when none of its pieces were rasterized
                let mut outcome = RasterOutcome::Degenerate;

                for assembled in FanAssembly::new(primitive_type, screen.len()) {
                    let piece = match assembled {
                        AssembledPrimitive::Line([i, j]) => {
                            rasterize_line(&args, &screen[i], &screen[j], &mut emit)
                        }
                        AssembledPrimitive::Triangle([i, j, k]) => {
                            rasterize_triangle(&args, &screen[i], &screen[j], &screen[k], &mut emit)
                        }
                    };

                    outcome = match (outcome, piece) {
                        (RasterOutcome::Rasterized, _) | (_, RasterOutcome::Rasterized) => RasterOutcome::Rasterized,
                        (RasterOutcome::Culled, _) | (_, RasterOutcome::Culled) => RasterOutcome::Culled,
                        _ => RasterOutcome::Degenerate,
                    };
                }

                match outcome {
                    RasterOutcome::Rasterized => {}
                    RasterOutcome::Culled => {
                        trace!("Primitive {} ({:?}) was culled", stats.primitives - 1, primitive.as_slice());
                        stats.culled += 1;
                    }
                    RasterOutcome::Degenerate => {
                        trace!("Primitive {} ({:?}) is degenerate", stats.primitives - 1, primitive.as_slice());
                        stats.degenerate += 1;
                    }
                }
            }

            stats.fragments_shaded = fragments_shaded;
            stats.fragments_discarded = fragments_discarded;
            stats.fragments_passed = fragments_passed;
        }

        debug!("draw_indexed({:?}): {:?}", topology, stats);

        Ok(stats)
    }
}
