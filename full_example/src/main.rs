use std::error::Error;

use log::info;

use softraster::{
    ColorBuffer, ColorFormat, CullMode, DepthBuffer, DepthFormat, Edge, Filter, RasterizerState, RenderingContext,
    RenderTarget, Sampler, Texture2D, Topology, Color,
};
use softraster::image_compat::CopyToImage;

use full_example::{generate_global_uniforms, Camera};
use full_example::mesh::{self, Mesh};
use full_example::shaders;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FRAMES: u32 = 8;
const TEXTURE_SIZE: u32 = 64;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cube = mesh::cube();
    let attributes = Mesh::attributes()?;

    let texture_data = mesh::checkerboard(TEXTURE_SIZE, 8);
    let texture = Texture2D::new(&texture_data, TEXTURE_SIZE, TEXTURE_SIZE, 0, ColorFormat::Rgba8)?;
    let sampler = Sampler { filter: Filter::Bilinear, edge: Edge::Wrap };

    let camera = Camera {
        orbit: 75.0f32.to_radians(),
        distance: 3.0,
        fov: 65.0f32.to_radians(),
        aspect_ratio: WIDTH as f32 / HEIGHT as f32,
    };

    for frame in 0..FRAMES {
        let mut color = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
        let mut depth = vec![0u8; (WIDTH * HEIGHT * 4) as usize];

        // Create any global uniforms you wish the shaders to have access to.
        let global_uniforms = generate_global_uniforms(&camera,
                                                       frame as f32 / FRAMES as f32 * 90.0f32.to_radians(),
                                                       texture, sampler);

        let mut context = RenderingContext::new(global_uniforms);

        context.set_vertex_shader(shaders::vertex_shader);
        context.set_fragment_shader(shaders::fragment_shader);

        for &(slot, attribute) in &attributes {
            context.set_vertex_attribute(slot, attribute)?;
            context.set_vertex_buffer(slot, &cube.vertices)?;
        }

        context.set_index_buffer(&cube.indices[..]);
        context.set_rasterizer_state(RasterizerState { cull_mode: CullMode::Back, ..RasterizerState::default() });
        context.set_render_target(RenderTarget::with_depth(
            ColorBuffer::new(&mut color, WIDTH, HEIGHT, 0, ColorFormat::Rgba8)?,
            DepthBuffer::new(&mut depth, WIDTH, HEIGHT, 0, DepthFormat::D24)?)?);

        // Near-black background
        context.clear_color(&Color::new(0.01, 0.01, 0.01, 1.0))?;
        context.clear_depth(1.0)?;

        let stats = context.draw_indexed(Topology::TriangleList)?;

        info!("Frame {}: {:?}", frame, stats);

        let target = context.render_target().ok_or("render target was unbound")?;

        // Window y points up, images count rows from the top
        let mut image = target.color.copy_to_image().ok_or("color buffer could not be copied")?;
        image::imageops::flip_vertical_in_place(&mut image);

        let path = format!("frame{:02}.png", frame);

        println!("Saving frame {} to {}", frame, path);

        image.save(&path)?;
    }

    Ok(())
}
