// Host-side tests for the orbiting debris field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use glam::{Mat4, Vec3};
use particles::*;

fn approx_vec(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

fn still_particle() -> Particle {
    Particle {
        phase: 0.0,
        orbit_factor: 30.0,
        speed: 0.02,
        offset: Vec3::ZERO,
    }
}

#[test]
fn reference_particle_starts_at_ten_zero_ten() {
    let p = still_particle();
    assert!(approx_vec(p.position_at(0.0), Vec3::new(10.0, 0.0, 10.0), 1e-5));
}

#[test]
fn z_axis_orbits_at_half_speed() {
    let p = still_particle();
    // After a quarter turn on x/y the z angle has covered an eighth.
    let t = std::f32::consts::FRAC_PI_2 / p.speed;
    let pos = p.position_at(t);
    assert!(approx_vec(
        pos,
        Vec3::new(0.0, 10.0, std::f32::consts::FRAC_PI_4.cos() * 10.0),
        1e-3
    ));
}

#[test]
fn position_is_a_pure_function_of_time() {
    let p = Particle {
        phase: 12.5,
        orbit_factor: 64.0,
        speed: 0.013,
        offset: Vec3::new(-20.0, 4.0, 33.0),
    };
    assert_eq!(p.position_at(7.25), p.position_at(7.25));
    // Orbit stays on a bounded shell around the offset
    for i in 0..50 {
        let pos = p.position_at(i as f32 * 3.0) * 3.0 - p.offset;
        assert!(pos.x.abs() <= 64.0 + 1e-3 && pos.y.abs() <= 64.0 + 1e-3 && pos.z.abs() <= 64.0 + 1e-3);
    }
}

#[test]
fn rotation_spins_all_axes_together() {
    let p = Particle {
        phase: 3.0,
        ..still_particle()
    };
    assert_eq!(p.rotation_at(2.0), Vec3::splat(5.0));
}

#[test]
fn transform_carries_scale_and_translation() {
    let p = still_particle();
    let m = p.transform_at(0.0, 0.5);
    let (scale, _rot, translation) = m.to_scale_rotation_translation();
    assert!(approx_vec(scale, Vec3::splat(0.125), 1e-5));
    assert!(approx_vec(translation, Vec3::new(10.0, 0.0, 10.0), 1e-4));
}

#[test]
fn scale_jitter_range() {
    assert!((scale_for(0.0) - 0.1).abs() < 1e-7);
    assert!((scale_for(1.0) - 0.15).abs() < 1e-7);
}

#[test]
fn random_particles_respect_parameter_ranges() {
    use rand::{rngs::StdRng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = Particle::random(&mut rng);
        assert!((0.0..=100.0).contains(&p.phase));
        assert!((20.0..=120.0).contains(&p.orbit_factor));
        assert!((0.01..=0.015).contains(&p.speed));
        assert!(p.offset.abs().max_element() <= 50.0);
    }
}

#[test]
fn field_size_is_constant_across_updates() {
    let mut field = ParticleField::new(50, ScaleJitter::PerFrame, 42);
    assert_eq!(field.len(), 50);
    for i in 0..10 {
        assert_eq!(field.update(i as f32 * 0.016).len(), 50);
    }
    assert_eq!(field.len(), 50);
    assert_eq!(field.matrices().len(), 50);
}

#[test]
fn empty_field_is_allowed() {
    let mut field = ParticleField::new(0, ScaleJitter::Fixed, 1);
    assert!(field.is_empty());
    assert!(field.update(1.0).is_empty());
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::new(50, ScaleJitter::PerFrame, 99);
    let b = ParticleField::new(50, ScaleJitter::PerFrame, 99);
    assert_eq!(a.particles(), b.particles());
    let c = ParticleField::new(50, ScaleJitter::PerFrame, 100);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn fixed_jitter_repeats_per_frame_jitter_shimmers() {
    let mut fixed = ParticleField::new(20, ScaleJitter::Fixed, 5);
    let first: Vec<Mat4> = fixed.update(2.0).to_vec();
    let second: Vec<Mat4> = fixed.update(2.0).to_vec();
    assert_eq!(first, second);

    let mut shimmer = ParticleField::new(20, ScaleJitter::PerFrame, 5);
    let first: Vec<Mat4> = shimmer.update(2.0).to_vec();
    let second: Vec<Mat4> = shimmer.update(2.0).to_vec();
    assert_ne!(first, second);
    // Only the scale changes; positions are still the closed-form orbit
    for ((a, b), p) in first.iter().zip(&second).zip(shimmer.particles()) {
        let pos = p.position_at(2.0);
        assert!(approx_vec(a.w_axis.truncate(), pos, 1e-4));
        assert!(approx_vec(b.w_axis.truncate(), pos, 1e-4));
    }
}

#[test]
fn default_jitter_is_per_frame() {
    assert_eq!(ScaleJitter::default(), ScaleJitter::PerFrame);
    let field = ParticleField::new(3, ScaleJitter::default(), 0);
    assert_eq!(field.jitter(), ScaleJitter::PerFrame);
}
