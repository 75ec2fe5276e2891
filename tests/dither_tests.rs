// Host-side tests for the Bayer quantizer and the CPU reference of the dithered material.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod noise {
    include!("../src/core/noise.rs");
}
mod dither {
    include!("../src/core/dither.rs");
}
mod shading {
    include!("../src/core/shading.rs");
}

use dither::*;
use glam::{Vec2, Vec3};
use shading::*;

fn orb_palette() -> Palette {
    Palette::new(constants::ORB_COLOR_DARK, constants::ORB_COLOR_LIGHT)
}

#[test]
fn bayer_matrix_is_a_permutation_of_sixteen_ranks() {
    let mut seen = [false; 16];
    for row in BAYER_4X4 {
        for v in row {
            assert!(!seen[v as usize], "rank {v} repeated");
            seen[v as usize] = true;
        }
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn threshold_tiles_every_four_pixels() {
    for y in -9..9 {
        for x in -9..9 {
            let t = bayer_threshold(x, y);
            assert_eq!(t, bayer_threshold(x + 4, y));
            assert_eq!(t, bayer_threshold(x, y + 4));
            assert!((0.0..=15.0 / 16.0).contains(&t));
        }
    }
}

#[test]
fn threshold_reads_row_major_cells() {
    assert_eq!(bayer_threshold(0, 0), 0.0);
    assert_eq!(bayer_threshold(1, 0), 8.0 / 16.0);
    assert_eq!(bayer_threshold(0, 1), 12.0 / 16.0);
    assert_eq!(bayer_threshold(3, 3), 5.0 / 16.0);
    // Negative coordinates wrap like positive ones
    assert_eq!(bayer_threshold(-1, 0), bayer_threshold(3, 0));
}

#[test]
fn dither_scale_enlarges_cells() {
    // With scale 2 each matrix cell covers a 2x2 pixel block.
    for y in 0..8 {
        for x in 0..8 {
            let frag = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            assert_eq!(dither_threshold(frag, 2.0), bayer_threshold(x / 2, y / 2));
        }
    }
    let frag = Vec2::new(5.5, 2.5);
    assert_eq!(dither_threshold(frag, 1.0), bayer_threshold(5, 2));
    // Non-positive scales behave like 1
    assert_eq!(dither_threshold(frag, 0.0), dither_threshold(frag, 1.0));
    assert_eq!(dither_threshold(frag, -3.0), dither_threshold(frag, 1.0));
}

#[test]
fn quantizer_outputs_only_palette_colors() {
    let palette = orb_palette();
    for i in 0..=20 {
        let intensity = i as f32 / 20.0;
        for y in 0..6 {
            for x in 0..6 {
                let frag = Vec2::new(x as f32 * 1.7, y as f32 * 2.3);
                let c = quantize(intensity, frag, 1.5, &palette);
                assert!(c == palette.light || c == palette.dark, "blended color {c:?}");
            }
        }
    }
}

#[test]
fn full_intensity_is_always_light_and_zero_always_dark() {
    let palette = orb_palette();
    for y in 0..4 {
        for x in 0..4 {
            let frag = Vec2::new(x as f32, y as f32);
            assert_eq!(quantize(1.0, frag, 1.0, &palette), palette.light);
            assert_eq!(quantize(0.0, frag, 1.0, &palette), palette.dark);
        }
    }
}

#[test]
fn threshold_tie_resolves_to_dark() {
    let palette = orb_palette();
    // Pixel (1, 0) has threshold exactly 0.5
    let frag = Vec2::new(1.0, 0.0);
    assert_eq!(quantize(0.5, frag, 1.0, &palette), palette.dark);
    assert_eq!(quantize(0.500_1, frag, 1.0, &palette), palette.light);
}

#[test]
fn intensity_is_bounded_by_ambient_floor_and_peak() {
    let light = Vec3::new(10.0, 10.0, 10.0);
    for i in 0..64 {
        let a = i as f32 * 0.37;
        let normal = Vec3::new(a.cos(), (a * 0.5).sin(), a.sin());
        let surface = normal * 2.5;
        let v = intensity(normal, surface, light);
        assert!((0.1 - 1e-6..=0.9 + 1e-6).contains(&v), "intensity {v}");
    }
    // Facing the light directly gives the peak
    let n = Vec3::new(1.0, 1.0, 1.0).normalize();
    assert!((intensity(n, n, light) - 0.9).abs() < 1e-5);
    // Facing away gives the floor
    assert!((intensity(-n, -n, light) - 0.1).abs() < 1e-6);
}

#[test]
fn degenerate_light_or_normal_shades_fully_dark() {
    let palette = orb_palette();
    let p = Vec3::new(0.0, 2.5, 0.0);
    assert_eq!(diffuse(Vec3::Y, p, p), 0.0);
    assert_eq!(intensity(Vec3::Y, p, p), 0.0);
    assert_eq!(intensity(Vec3::ZERO, p, Vec3::ONE), 0.0);
    for y in 0..4 {
        for x in 0..4 {
            let frag = Vec2::new(x as f32, y as f32);
            assert_eq!(shade_fragment(Vec3::Y, p, p, frag, 1.0, &palette), palette.dark);
            assert_eq!(
                shade_fragment(Vec3::ZERO, p, Vec3::ONE, frag, 1.0, &palette),
                palette.dark
            );
        }
    }
}

#[test]
fn unlit_side_keeps_only_the_ambient_cells() {
    // Ambient 0.1 beats only the 0/16 and 1/16 thresholds in each 4x4 block
    let palette = orb_palette();
    let light = Vec3::new(0.0, 0.0, 10.0);
    let mut lit = 0;
    for y in 0..4 {
        for x in 0..4 {
            let frag = Vec2::new(x as f32, y as f32);
            let c = shade_fragment(Vec3::NEG_Z, Vec3::new(0.0, 0.0, -2.5), light, frag, 1.0, &palette);
            if c == palette.light {
                lit += 1;
            }
        }
    }
    assert_eq!(lit, 2);
}

#[test]
fn displacement_moves_along_the_normal_within_amplitude() {
    let d = Displacement::default();
    for i in 0..100 {
        let a = i as f32 * 0.21;
        let normal = Vec3::new(a.sin() * a.cos(), a.cos(), a.sin() * a.sin()).normalize();
        let position = normal * 2.5;
        let moved = d.displace(position, normal, i as f32 * 0.1);
        let along = (moved - position).dot(normal);
        let across = (moved - position) - normal * along;
        assert!(across.length() < 1e-4);
        assert!(along.abs() <= d.amplitude * 1.05);
    }
}

#[test]
fn zero_amplitude_keeps_the_sphere_round() {
    let d = Displacement {
        amplitude: 0.0,
        ..Displacement::default()
    };
    let p = Vec3::new(0.0, 0.0, 2.5);
    assert_eq!(d.displace(p, Vec3::Z, 12.0), p);
}
