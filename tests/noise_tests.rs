// Host-side tests for the simplex noise used to displace the orb.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod noise {
    include!("../src/core/noise.rs");
}

use glam::Vec3;
use noise::snoise;

fn sample_points() -> impl Iterator<Item = Vec3> {
    (0..2000).map(|i| {
        let f = i as f32;
        Vec3::new(
            (f * 0.731).sin() * 37.0 + f * 0.013,
            (f * 1.177).cos() * 21.0 - f * 0.007,
            (f * 0.293).sin() * 53.0,
        )
    })
}

#[test]
fn output_stays_roughly_in_unit_range() {
    for p in sample_points() {
        let n = snoise(p);
        assert!(n.is_finite(), "non-finite noise at {p:?}");
        assert!((-1.05..=1.05).contains(&n), "noise {n} out of range at {p:?}");
    }
}

#[test]
fn output_is_deterministic() {
    for p in sample_points().take(200) {
        assert_eq!(snoise(p), snoise(p));
    }
}

#[test]
fn small_input_steps_give_small_output_steps() {
    let eps = 1e-3;
    for p in sample_points().take(500) {
        let base = snoise(p);
        for d in [Vec3::X, Vec3::Y, Vec3::Z] {
            let moved = snoise(p + d * eps);
            assert!(
                (moved - base).abs() < 0.05,
                "jump of {} at {p:?} along {d:?}",
                moved - base
            );
        }
    }
}

#[test]
fn field_is_not_constant() {
    let values: Vec<f32> = sample_points().take(100).map(snoise).collect();
    let min = values.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = values.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert!(max - min > 0.3, "noise barely varies: [{min}, {max}]");
}

#[test]
fn cell_diagonal_points_are_continuous() {
    // Integer points with a coordinate sum divisible by 3 land exactly on a simplex
    // corner, where every component of the cell offset ties.
    let corners = [
        Vec3::new(0.0, 21.0, 0.0),
        Vec3::new(0.0, 9.0, 0.0),
        Vec3::ZERO,
        Vec3::new(3.0, 3.0, 3.0),
        Vec3::new(-5.0, 2.0, 6.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(4.5, 4.5, 4.5),
    ];
    let eps = 2.5e-4;
    for p in corners {
        let base = snoise(p);
        for d in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE.normalize()] {
            for side in [-1.0, 1.0] {
                let near = snoise(p + d * eps * side);
                assert!(
                    (near - base).abs() < 0.01,
                    "{base} at {p:?} but {near} just off it along {d:?}"
                );
            }
        }
    }
}

#[test]
fn lattice_corners_sit_near_zero() {
    for p in [Vec3::new(0.0, 21.0, 0.0), Vec3::new(0.0, 9.0, 0.0), Vec3::new(3.0, 3.0, 3.0)] {
        assert!(snoise(p).abs() < 1e-3, "snoise({p:?}) = {}", snoise(p));
    }
}
