use glam::{Vec2, Vec3};

/// 4x4 ordered-dither threshold ranks, row-major (`[y][x]`).
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Two-tone output palette of a dithered material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub dark: Vec3,
    pub light: Vec3,
}

impl Palette {
    pub fn new(dark: [f32; 3], light: [f32; 3]) -> Self {
        Self {
            dark: Vec3::from_array(dark),
            light: Vec3::from_array(light),
        }
    }
}

/// Threshold in [0, 15/16] for an integer pixel coordinate. Tiles every 4 pixels
/// in both directions, including negative coordinates.
#[inline]
pub fn bayer_threshold(x: i32, y: i32) -> f32 {
    let col = x.rem_euclid(4) as usize;
    let row = y.rem_euclid(4) as usize;
    BAYER_4X4[row][col] as f32 / 16.0
}

/// Threshold for a fragment coordinate with the dither cell spanning `scale` pixels.
#[inline]
pub fn dither_threshold(frag: Vec2, scale: f32) -> f32 {
    let scale = if scale > 0.0 { scale } else { 1.0 };
    let cell = (frag / scale).floor();
    bayer_threshold(cell.x as i32, cell.y as i32)
}

/// Pick `light` when `intensity` strictly exceeds the local threshold, else `dark`.
#[inline]
pub fn quantize(intensity: f32, frag: Vec2, scale: f32, palette: &Palette) -> Vec3 {
    if intensity > dither_threshold(frag, scale) {
        palette.light
    } else {
        palette.dark
    }
}
