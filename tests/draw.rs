mod common;

use nalgebra::Vector4;

use softraster::*;

use common::*;

fn draw_triangles(positions: &[[f32; 4]], indices: &[u16], rasterizer: RasterizerState) -> (Vec<u8>, DrawStats) {
    let vertices = position_buffer(positions);
    let mut color = vec![0u8; (SIZE * SIZE * 4) as usize];

    let stats = {
        let mut context = RenderingContext::new(());

        context.set_vertex_shader(passthrough);
        context.set_fragment_shader(white);
        context.set_vertex_attribute(POSITION_ATTRIBUTE, position_attribute()).unwrap();
        context.set_vertex_buffer(POSITION_ATTRIBUTE, &vertices).unwrap();
        context.set_index_buffer(indices);
        context.set_rasterizer_state(rasterizer);
        context.set_render_target(RenderTarget::new(ColorBuffer::new(&mut color, SIZE, SIZE, 0, ColorFormat::Rgba8).unwrap()));

        context.draw_indexed(Topology::TriangleList).unwrap()
    };

    (color, stats)
}

#[test]
fn test_small_triangle_end_to_end() {
    let (color, stats) = draw_triangles(&[
        [0.0, 0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
    ], &[0, 1, 2], RasterizerState::default());

    assert_eq!(lit_pixels(&color, SIZE), vec![(2, 2), (3, 2), (2, 3)]);
    assert_eq!(stats.primitives, 1);
    assert_eq!(stats.fragments_shaded, 3);
    assert_eq!(stats.fragments_passed, 3);
}

#[test]
fn test_back_face_culling() {
    let positions = [
        [-1.0, -1.0, 0.0, 1.0],
        [1.0, -1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0, 1.0],
    ];

    let rasterizer = RasterizerState { cull_mode: CullMode::Back, ..RasterizerState::default() };

    let (color, stats) = draw_triangles(&positions, &[0, 1, 2], rasterizer);
    assert!(!lit_pixels(&color, SIZE).is_empty());
    assert_eq!(stats.culled, 0);

    let (color, stats) = draw_triangles(&positions, &[0, 2, 1], rasterizer);
    assert!(lit_pixels(&color, SIZE).is_empty());
    assert_eq!(stats.culled, 1);

    // Clockwise front faces flip the result
    let rasterizer = RasterizerState { front_face: FaceWinding::Clockwise, ..rasterizer };

    let (color, _) = draw_triangles(&positions, &[0, 2, 1], rasterizer);
    assert!(!lit_pixels(&color, SIZE).is_empty());
}

#[test]
fn test_zero_w_vertex_is_skipped() {
    let (color, stats) = draw_triangles(&[
        [0.0, 0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
    ], &[0, 1, 2], RasterizerState::default());

    assert!(lit_pixels(&color, SIZE).is_empty());
    assert_eq!(stats.degenerate, 1);
    assert_eq!(stats.fragments_shaded, 0);
}

#[test]
fn test_fully_clipped_triangle() {
    let (color, stats) = draw_triangles(&[
        [2.0, 2.0, 0.0, 1.0],
        [3.0, 2.0, 0.0, 1.0],
        [2.0, 3.0, 0.0, 1.0],
    ], &[0, 1, 2], RasterizerState::default());

    assert!(lit_pixels(&color, SIZE).is_empty());
    assert_eq!(stats.clipped, 1);
}

#[test]
fn test_full_screen_quad_and_vertex_cache() {
    let (color, stats) = draw_triangles(&[
        [-1.0, -1.0, 0.0, 1.0],
        [1.0, -1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0, 1.0],
    ], &[0, 1, 2, 2, 1, 3], RasterizerState::default());

    assert_eq!(lit_pixels(&color, SIZE).len(), (SIZE * SIZE) as usize);
    assert_eq!(stats.cache_misses, 4);
    assert_eq!(stats.cache_hits, 2);
}

#[test]
fn test_scissor() {
    let rasterizer = RasterizerState { scissor: Some(Rect::new(1, 1, 3, 2)), ..RasterizerState::default() };

    let (color, _) = draw_triangles(&[
        [-1.0, -1.0, 0.0, 1.0],
        [1.0, -1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0, 1.0],
    ], &[0, 1, 2, 2, 1, 3], rasterizer);

    assert_eq!(lit_pixels(&color, SIZE), vec![(1, 1), (2, 1)]);
}

fn draw_line(start: [f32; 4], end: [f32; 4]) -> (Vec<u8>, DrawStats) {
    let vertices = position_buffer(&[start, end]);

    let indices: &[u32] = &[0, 1];
    let mut color = vec![0u8; (SIZE * SIZE * 4) as usize];

    let stats = {
        let mut context = RenderingContext::new(());

        context.set_vertex_shader(passthrough);
        context.set_fragment_shader(white);
        context.set_vertex_attribute(POSITION_ATTRIBUTE, position_attribute()).unwrap();
        context.set_vertex_buffer(POSITION_ATTRIBUTE, &vertices).unwrap();
        context.set_index_buffer(indices);
        context.set_render_target(RenderTarget::new(ColorBuffer::new(&mut color, SIZE, SIZE, 0, ColorFormat::Rgba8).unwrap()));

        context.draw_indexed(Topology::LineList).unwrap()
    };

    (color, stats)
}

#[test]
fn test_horizontal_line_end_to_end() {
    let (color, stats) = draw_line([-0.75, -0.75, 0.0, 1.0], [0.75, -0.75, 0.0, 1.0]);

    assert_eq!(stats.fragments_passed, 4);
    assert_eq!(lit_pixels(&color, SIZE), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_line_on_pixel_boundary_is_one_pixel_thick() {
    // Window (0.5, 1.0) to (3.5, 1.0), exactly between rows 0 and 1
    let (color, stats) = draw_line([-0.75, -0.5, 0.0, 1.0], [0.75, -0.5, 0.0, 1.0]);

    assert_eq!(stats.fragments_passed, 4);
    assert_eq!(lit_pixels(&color, SIZE), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

    // Window (1.0, 0.5) to (1.0, 3.5), exactly between columns 0 and 1
    let (color, _) = draw_line([-0.5, -0.75, 0.0, 1.0], [-0.5, 0.75, 0.0, 1.0]);

    assert_eq!(lit_pixels(&color, SIZE), vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_clipped_back_face_is_culled_once() {
    // Crosses the left, right and top planes, so it is split into several triangles
    let positions = [
        [-3.0, -0.5, 0.0, 1.0],
        [3.0, -0.5, 0.0, 1.0],
        [0.0, 3.0, 0.0, 1.0],
    ];

    let rasterizer = RasterizerState { cull_mode: CullMode::Back, ..RasterizerState::default() };

    let (color, stats) = draw_triangles(&positions, &[0, 2, 1], rasterizer);

    assert!(lit_pixels(&color, SIZE).is_empty());
    assert_eq!(stats.primitives, 1);
    assert_eq!(stats.culled, 1);
    assert_eq!(stats.degenerate, 0);
}

#[test]
fn test_out_of_range_index_draws_nothing() {
    let vertices = position_buffer(&[
        [-1.0, -1.0, 0.0, 1.0],
        [1.0, -1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0, 1.0],
    ]);

    // The first triangle is valid, the second reads past the buffer
    let indices: &[u16] = &[0, 1, 2, 0, 1, 9];
    let mut color = vec![0u8; (SIZE * SIZE * 4) as usize];

    {
        let mut context = RenderingContext::new(());

        context.set_vertex_shader(passthrough);
        context.set_fragment_shader(white);
        context.set_vertex_attribute(POSITION_ATTRIBUTE, position_attribute()).unwrap();
        context.set_vertex_buffer(POSITION_ATTRIBUTE, &vertices).unwrap();
        context.set_index_buffer(indices);
        context.set_render_target(RenderTarget::new(ColorBuffer::new(&mut color, SIZE, SIZE, 0, ColorFormat::Rgba8).unwrap()));

        assert_eq!(context.draw_indexed(Topology::TriangleList), Err(RenderError::VertexOutOfRange { slot: 0, index: 9 }));
    }

    assert!(lit_pixels(&color, SIZE).is_empty());
}

#[test]
fn test_discard() {
    let vertices = position_buffer(&[
        [-1.0, -1.0, 0.0, 1.0],
        [1.0, -1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0, 1.0],
    ]);

    let indices: &[u16] = &[0, 1, 2];
    let mut color = vec![0u8; (SIZE * SIZE * 4) as usize];

    {
        let mut context = RenderingContext::new(());

        context.set_vertex_shader(passthrough);
        // Keep only the left half
        context.set_fragment_shader(|_: &(), frag_coord: &Vector4<f32>, _: &Varyings| {
            if frag_coord.x < 2.0 { FragmentOutput::Color(Vector4::repeat(1.0)) } else { FragmentOutput::Discard }
        });
        context.set_vertex_attribute(POSITION_ATTRIBUTE, position_attribute()).unwrap();
        context.set_vertex_buffer(POSITION_ATTRIBUTE, &vertices).unwrap();
        context.set_index_buffer(indices);
        context.set_render_target(RenderTarget::new(ColorBuffer::new(&mut color, SIZE, SIZE, 0, ColorFormat::Rgba8).unwrap()));

        let stats = context.draw_indexed(Topology::TriangleList).unwrap();

        assert_eq!(stats.fragments_shaded, 10);
        assert_eq!(stats.fragments_discarded, 3);
    }

    assert!(lit_pixels(&color, SIZE).iter().all(|&(x, _)| x < 2));
    assert_eq!(lit_pixels(&color, SIZE).len(), 7);
}

#[test]
fn test_missing_state_errors() {
    let mut color = vec![0u8; (SIZE * SIZE * 4) as usize];
    let vertices = position_buffer(&[[0.0, 0.0, 0.0, 1.0]]);
    let indices: &[u16] = &[0, 1, 2];

    let mut context = RenderingContext::new(());

    assert_eq!(context.draw_indexed(Topology::TriangleList), Err(RenderError::MissingVertexShader));

    context.set_vertex_shader(passthrough);
    assert_eq!(context.draw_indexed(Topology::TriangleList), Err(RenderError::MissingFragmentShader));

    context.set_fragment_shader(white);
    assert_eq!(context.draw_indexed(Topology::TriangleList), Err(RenderError::MissingIndexBuffer));

    context.set_index_buffer(indices);
    assert_eq!(context.draw_indexed(Topology::TriangleList), Err(RenderError::MissingRenderTarget));

    context.set_render_target(RenderTarget::new(ColorBuffer::new(&mut color, SIZE, SIZE, 0, ColorFormat::Rgba8).unwrap()));
    context.set_vertex_attribute(POSITION_ATTRIBUTE, position_attribute()).unwrap();
    assert_eq!(context.draw_indexed(Topology::TriangleList), Err(RenderError::MissingVertexBuffer { slot: 0 }));

    context.set_vertex_buffer(POSITION_ATTRIBUTE, &vertices).unwrap();
    assert_eq!(context.draw_indexed(Topology::TriangleList), Err(RenderError::VertexOutOfRange { slot: 0, index: 2 }));
}

#[test]
fn test_varying_count_mismatch() {
    let vertices = position_buffer(&[
        [-1.0, -1.0, 0.0, 1.0],
        [1.0, -1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0, 1.0],
    ]);

    let indices: &[u16] = &[0, 1, 2];
    let mut color = vec![0u8; (SIZE * SIZE * 4) as usize];

    let mut context = RenderingContext::new(());

    // Only the first vertex gets a varying
    context.set_vertex_shader(|_: &(), attributes: &Attributes| {
        let position = attributes[POSITION_ATTRIBUTE];

        if position.y > 0.0 || position.x > 0.0 {
            ClipVertex::from_position(position)
        } else {
            ClipVertex::new(position, Varyings::from_slice(&[position]))
        }
    });
    context.set_fragment_shader(white);
    context.set_vertex_attribute(POSITION_ATTRIBUTE, position_attribute()).unwrap();
    context.set_vertex_buffer(POSITION_ATTRIBUTE, &vertices).unwrap();
    context.set_index_buffer(indices);
    context.set_render_target(RenderTarget::new(ColorBuffer::new(&mut color, SIZE, SIZE, 0, ColorFormat::Rgba8).unwrap()));

    assert_eq!(context.draw_indexed(Topology::TriangleList),
               Err(RenderError::VaryingCountMismatch { expected: 1, found: 0 }));
}
