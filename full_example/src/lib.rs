pub mod color;
pub mod mesh;
pub mod light;
pub mod uniforms;
pub mod shaders;

use nalgebra::{Vector3, Point3, Perspective3, Isometry3, Matrix4};

use softraster::{Color, Sampler, Texture2D};

use self::light::PointLight;
use self::uniforms::GlobalUniforms;

/// Camera circling the origin at a fixed height, always looking at the center
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Angle around the y-axis, in radians
    pub orbit: f32,
    pub distance: f32,
    /// Vertical field of view, in radians
    pub fov: f32,
    pub aspect_ratio: f32,
}

impl Camera {
    pub fn position(&self) -> Point3<f32> {
        Point3::new(self.orbit.cos() * self.distance,
                    self.distance * 0.75,
                    self.orbit.sin() * self.distance)
    }

    pub fn view(&self) -> Matrix4<f32> {
        Isometry3::look_at_rh(&self.position(), &Point3::origin(), &Vector3::y()).to_homogeneous()
    }

    pub fn projection(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect_ratio, self.fov, 0.1, 100.0).to_homogeneous()
    }
}

/// Model matrix for an object spinning around the y-axis, along with its inverse transpose for normals
pub fn model_matrix(rotation: f32) -> (Matrix4<f32>, Matrix4<f32>) {
    let transform = Isometry3::rotation(Vector3::y() * rotation);

    (transform.to_homogeneous(),
     transform.inverse().to_homogeneous().transpose())
}

/// Lights placed around the object at `scale` times their base distance
pub fn scene_lights(scale: f32) -> Vec<PointLight> {
    vec![
        PointLight::white(Point3::new(-1.0, 1.0, -1.0) * scale, 9.0),
        PointLight::new(Point3::new(1.0, 1.0, 1.0) * scale, Color::new(0.6, 0.6, 1.0, 1.0), 9.0),
        PointLight::new(Point3::new(0.0, 3.0, -1.0) * scale, Color::new(1.0, 0.3, 0.3, 1.0), 25.0),
        PointLight::new(Point3::new(-2.0, -1.0, 1.0) * scale, Color::new(0.7, 1.0, 0.7, 1.0), 25.0),
    ]
}

pub fn generate_global_uniforms<'t>(camera: &Camera,
                                    object_rotation: f32,
                                    texture: Texture2D<'t>,
                                    sampler: Sampler) -> GlobalUniforms<'t> {
    let (model, model_inverse_transpose) = model_matrix(object_rotation);

    GlobalUniforms {
        camera: camera.position().to_homogeneous(),
        model,
        model_inverse_transpose,
        view: camera.view(),
        projection: camera.projection(),
        lights: scene_lights(1.5),
        texture,
        sampler,
    }
}
