// CPU reference of the dithered material: vertex displacement and per-fragment
// lighting. `shaders/dither.wgsl` implements the same math on the GPU.

use glam::{Vec2, Vec3};

use super::constants::{
    AMBIENT_FLOOR, DIFFUSE_WEIGHT, DISPLACE_AMPLITUDE, DISPLACE_FREQUENCY, DISPLACE_TIME_SCALE,
};
use super::dither::{quantize, Palette};
use super::noise::snoise;

/// Noise displacement applied along the vertex normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displacement {
    pub frequency: f32,
    pub time_scale: f32,
    pub amplitude: f32,
}

impl Default for Displacement {
    fn default() -> Self {
        Self {
            frequency: DISPLACE_FREQUENCY,
            time_scale: DISPLACE_TIME_SCALE,
            amplitude: DISPLACE_AMPLITUDE,
        }
    }
}

impl Displacement {
    /// Signed offset along the normal at `position` and `time`.
    #[inline]
    pub fn offset(&self, position: Vec3, time: f32) -> f32 {
        snoise(position * self.frequency + Vec3::splat(time * self.time_scale)) * self.amplitude
    }

    #[inline]
    pub fn displace(&self, position: Vec3, normal: Vec3, time: f32) -> Vec3 {
        position + normal * self.offset(position, time)
    }
}

/// Diffuse term against a point light. Degenerate normals or a light sitting on the
/// surface contribute nothing instead of producing NaN.
#[inline]
pub fn diffuse(normal: Vec3, surface: Vec3, light_pos: Vec3) -> f32 {
    let light_dir = (light_pos - surface).normalize_or_zero();
    normal.normalize_or_zero().dot(light_dir).max(0.0)
}

/// Lit intensity fed to the quantizer: `diffuse * 0.8 + 0.1`.
///
/// A zero normal or a light sitting on the surface has no direction to light from,
/// so the fragment gets intensity 0 and quantizes fully dark.
#[inline]
pub fn intensity(normal: Vec3, surface: Vec3, light_pos: Vec3) -> f32 {
    match (normal.try_normalize(), (light_pos - surface).try_normalize()) {
        (Some(n), Some(l)) => n.dot(l).max(0.0) * DIFFUSE_WEIGHT + AMBIENT_FLOOR,
        _ => 0.0,
    }
}

/// Final two-tone color of one fragment.
#[inline]
pub fn shade_fragment(
    normal: Vec3,
    surface: Vec3,
    light_pos: Vec3,
    frag: Vec2,
    dither_scale: f32,
    palette: &Palette,
) -> Vec3 {
    quantize(intensity(normal, surface, light_pos), frag, dither_scale, palette)
}
