use nalgebra::{Point3, Vector3, Vector4};

use softraster::Color;

/// Point light without falloff
pub struct PointLight {
    pub position: Point3<f32>,
    /// Light color scaled by its intensity
    pub radiance: Vector3<f32>,
}

impl PointLight {
    pub fn new(position: Point3<f32>, color: Color, intensity: f32) -> PointLight {
        PointLight { position, radiance: color.xyz() * intensity }
    }

    pub fn white(position: Point3<f32>, intensity: f32) -> PointLight {
        PointLight::new(position, Color::new(1.0, 1.0, 1.0, 1.0), intensity)
    }

    /// Unit vector from a homogeneous world position towards the light
    pub fn direction_from(&self, point: &Vector4<f32>) -> Vector4<f32> {
        (self.position.to_homogeneous() - point).normalize()
    }
}
