mod common;

use nalgebra::Vector4;

use softraster::*;

use common::*;

/// Draws a full-screen quad at constant depth over a depth buffer cleared to 0.5,
/// returning the color of one pixel and the depth stored there.
fn draw_at_depth(z: f32, state: DepthState, format: DepthFormat) -> ([u8; 4], f32) {
    // z in NDC maps to (z + 1) / 2 with the default depth range
    let z = z * 2.0 - 1.0;

    let vertices = position_buffer(&[
        [-1.0, -1.0, z, 1.0],
        [1.0, -1.0, z, 1.0],
        [-1.0, 1.0, z, 1.0],
        [1.0, 1.0, z, 1.0],
    ]);

    let indices: &[u16] = &[0, 1, 2, 3];

    let mut color = vec![0u8; (SIZE * SIZE * 4) as usize];
    let mut depth = vec![0u8; (SIZE * SIZE * 4) as usize];

    let mut context = RenderingContext::new(());

    context.set_vertex_shader(passthrough);
    context.set_fragment_shader(white);
    context.set_vertex_attribute(POSITION_ATTRIBUTE, position_attribute()).unwrap();
    context.set_vertex_buffer(POSITION_ATTRIBUTE, &vertices).unwrap();
    context.set_index_buffer(indices);
    context.set_depth_state(state);
    context.set_render_target(RenderTarget::with_depth(
        ColorBuffer::new(&mut color, SIZE, SIZE, 0, ColorFormat::Rgba8).unwrap(),
        DepthBuffer::new(&mut depth, SIZE, SIZE, 0, format).unwrap()).unwrap());

    context.clear_depth(0.5).unwrap();
    context.draw_indexed(Topology::TriangleStrip).unwrap();

    let target = context.render_target().unwrap();

    (target.color.get_rgba8(1, 1).unwrap(), target.depth.as_ref().unwrap().get_depth(1, 1).unwrap())
}

#[test]
fn test_depth_comparators() {
    let expected = [
        (DepthFunc::Never, [false, false, false]),
        (DepthFunc::Less, [true, false, false]),
        (DepthFunc::Equal, [false, true, false]),
        (DepthFunc::LessEqual, [true, true, false]),
        (DepthFunc::Greater, [false, false, true]),
        (DepthFunc::NotEqual, [true, false, true]),
        (DepthFunc::GreaterEqual, [false, true, true]),
        (DepthFunc::Always, [true, true, true]),
    ];

    for &format in &[DepthFormat::D24, DepthFormat::D32Float] {
        for &(func, results) in &expected {
            for (&incoming, &passes) in [0.3f32, 0.5, 0.7].iter().zip(results.iter()) {
                let state = DepthState { func, ..DepthState::default() };

                let (color, depth) = draw_at_depth(incoming, state, format);

                let written = color == [255, 255, 255, 255];

                assert_eq!(written, passes, "{:?} {:?} with {}", format, func, incoming);

                let expected_depth = if passes { incoming } else { 0.5 };
                assert!((depth - expected_depth).abs() < 1e-5, "{:?} {:?} with {} stored {}", format, func, incoming, depth);
            }
        }
    }
}

#[test]
fn test_depth_test_disabled() {
    let state = DepthState { test_enabled: false, func: DepthFunc::Never, ..DepthState::default() };

    let (color, depth) = draw_at_depth(0.9, state, DepthFormat::D24);

    assert_eq!(color, [255, 255, 255, 255]);
    assert!((depth - 0.5).abs() < 1e-6);
}

#[test]
fn test_depth_range_mapping() {
    let viewport = Viewport::with_size(SIZE, SIZE);

    for &(range, near, far) in &[(DepthRange::default(), 0.0, 1.0), (DepthRange::new(0.25, 0.75), 0.25, 0.75)] {
        let at = |z: f32| {
            ScreenVertex::from_clip(&ClipVertex::from_position(Vector4::new(0.0, 0.0, z, 1.0)), &viewport, &range).unwrap().depth
        };

        assert!((at(-1.0) - near).abs() < 1e-6);
        assert!((at(1.0) - far).abs() < 1e-6);
        assert!((at(0.0) - (near + far) / 2.0).abs() < 1e-6);
    }
}

#[test]
fn test_nearest_triangle_wins() {
    // Two overlapping full-screen triangles, the far one drawn last
    let vertices = position_buffer(&[
        [-1.0, -1.0, -0.5, 1.0],
        [3.0, -1.0, -0.5, 1.0],
        [-1.0, 3.0, -0.5, 1.0],
        [-1.0, -1.0, 0.5, 1.0],
        [3.0, -1.0, 0.5, 1.0],
        [-1.0, 3.0, 0.5, 1.0],
    ]);

    let indices: &[u16] = &[0, 1, 2, 3, 4, 5];

    let mut color = vec![0u8; (SIZE * SIZE * 4) as usize];
    let mut depth = vec![0u8; (SIZE * SIZE * 4) as usize];

    let mut context = RenderingContext::new(());

    context.set_vertex_shader(passthrough);
    // Color by depth, so near is dark
    context.set_fragment_shader(|_: &(), frag_coord: &Vector4<f32>, _: &Varyings| {
        Vector4::new(frag_coord.z, frag_coord.z, frag_coord.z, 1.0)
    });
    context.set_vertex_attribute(POSITION_ATTRIBUTE, position_attribute()).unwrap();
    context.set_vertex_buffer(POSITION_ATTRIBUTE, &vertices).unwrap();
    context.set_index_buffer(indices);
    context.set_render_target(RenderTarget::with_depth(
        ColorBuffer::new(&mut color, SIZE, SIZE, 0, ColorFormat::Bgra8).unwrap(),
        DepthBuffer::new(&mut depth, SIZE, SIZE, 0, DepthFormat::D24).unwrap()).unwrap());

    context.clear_depth(1.0).unwrap();
    context.clear_color(&Color::new(1.0, 0.0, 0.0, 1.0)).unwrap();

    let stats = context.draw_indexed(Topology::TriangleList).unwrap();

    assert_eq!(stats.fragments_passed, (SIZE * SIZE) as usize);

    let target = context.render_target().unwrap();

    for y in 0..SIZE {
        for x in 0..SIZE {
            // 0.25 * 255 rounds to 64
            assert_eq!(target.color.get_rgba8(x, y), Some([64, 64, 64, 255]));
            assert!((target.depth.as_ref().unwrap().get_depth(x, y).unwrap() - 0.25).abs() < 1e-6);
        }
    }
}
