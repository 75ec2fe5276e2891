use glam::{Mat4, Vec3};

use super::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_POLAR_MAX, CAMERA_POLAR_MIN, CAMERA_Z,
    ORBIT_DRAG_SPEED,
};

/// View/projection block bound at group 0 by every pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    /// x = elapsed seconds, rest unused
    pub params: [f32; 4],
}

/// Camera orbiting the origin at a fixed distance. No zoom or pan; the polar
/// angle (measured from +Y) stays within [`CAMERA_POLAR_MIN`, `CAMERA_POLAR_MAX`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    pub fovy_radians: f32,
    pub aspect: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance: CAMERA_Z,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            aspect: 1.0,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        Vec3::new(sp * sa, cp, sp * ca) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Rotate by a pointer drag of (`dx`, `dy`) pixels on a canvas `height` pixels tall.
    pub fn orbit_by_pixels(&mut self, dx: f32, dy: f32, height: f32) {
        let h = height.max(1.0);
        self.azimuth -= ORBIT_DRAG_SPEED * dx / h;
        self.polar = (self.polar - ORBIT_DRAG_SPEED * dy / h).clamp(CAMERA_POLAR_MIN, CAMERA_POLAR_MAX);
    }

    pub fn uniforms(&self, elapsed: f32) -> CameraUniforms {
        CameraUniforms {
            view: self.view_matrix().to_cols_array_2d(),
            proj: self.projection_matrix().to_cols_array_2d(),
            params: [elapsed, 0.0, 0.0, 0.0],
        }
    }
}
