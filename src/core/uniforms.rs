use glam::{Mat4, Vec3};

use super::constants::{LIGHT_HEIGHT, LIGHT_INITIAL_POS, LIGHT_ORBIT_RADIUS, LIGHT_ORBIT_SPEED};
use super::dither::Palette;
use super::shading::Displacement;

/// Per-material uniform block shared by the orb and debris pipelines.
///
/// Layout matches `struct Material` in `shaders/dither.wgsl` (144 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DitherUniforms {
    pub model: [[f32; 4]; 4],
    pub color_dark: [f32; 3],
    pub time: f32,
    pub color_light: [f32; 3],
    pub dither_scale: f32,
    pub light_pos: [f32; 3],
    pub _pad0: f32,
    pub resolution: [f32; 2],
    pub _pad1: [f32; 2],
    /// frequency, time scale, amplitude, unused
    pub displace: [f32; 4],
}

impl DitherUniforms {
    pub fn new(palette: &Palette, dither_scale: f32, displacement: &Displacement) -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color_dark: palette.dark.to_array(),
            time: 0.0,
            color_light: palette.light.to_array(),
            dither_scale,
            light_pos: LIGHT_INITIAL_POS,
            _pad0: 0.0,
            resolution: [1.0, 1.0],
            _pad1: [0.0; 2],
            displace: [
                displacement.frequency,
                displacement.time_scale,
                displacement.amplitude,
                0.0,
            ],
        }
    }

    /// Frame update: elapsed time in, time and orbiting light position written.
    #[must_use]
    pub fn advance(self, elapsed: f32, orbit: &LightOrbit) -> Self {
        Self {
            time: elapsed,
            light_pos: orbit.position(elapsed).to_array(),
            ..self
        }
    }

    #[must_use]
    pub fn with_model(self, model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            ..self
        }
    }

    #[must_use]
    pub fn with_resolution(self, width: u32, height: u32) -> Self {
        Self {
            resolution: [width.max(1) as f32, height.max(1) as f32],
            ..self
        }
    }

    pub fn light_position(&self) -> Vec3 {
        Vec3::from_array(self.light_pos)
    }
}

/// Circular light path around the Y axis at a fixed height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightOrbit {
    pub radius: f32,
    pub speed: f32,
    pub height: f32,
}

impl Default for LightOrbit {
    fn default() -> Self {
        Self {
            radius: LIGHT_ORBIT_RADIUS,
            speed: LIGHT_ORBIT_SPEED,
            height: LIGHT_HEIGHT,
        }
    }
}

impl LightOrbit {
    #[inline]
    pub fn position(&self, elapsed: f32) -> Vec3 {
        let a = elapsed * self.speed;
        Vec3::new(a.sin() * self.radius, self.height, a.cos() * self.radius)
    }
}
