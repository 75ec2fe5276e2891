// Orbiting debris: a fixed pool of particles whose transforms are a closed-form
// function of elapsed time. Nothing is integrated between frames.

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;

use super::constants::{
    PARTICLE_FACTOR_MIN, PARTICLE_FACTOR_SPAN, PARTICLE_OFFSET_HALF_RANGE, PARTICLE_PHASE_MAX,
    PARTICLE_POSITION_DIVISOR, PARTICLE_SCALE_BASE, PARTICLE_SCALE_JITTER, PARTICLE_SPEED_MIN,
    PARTICLE_SPEED_SPAN, PARTICLE_Z_SPEED_RATIO,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub phase: f32,
    pub orbit_factor: f32,
    pub speed: f32,
    pub offset: Vec3,
}

impl Particle {
    pub fn random(rng: &mut impl Rng) -> Self {
        let phase = rng.gen::<f32>() * PARTICLE_PHASE_MAX;
        let orbit_factor = PARTICLE_FACTOR_MIN + rng.gen::<f32>() * PARTICLE_FACTOR_SPAN;
        let speed = PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_SPAN;
        let mut axis = || (rng.gen::<f32>() * 2.0 - 1.0) * PARTICLE_OFFSET_HALF_RANGE;
        let offset = Vec3::new(axis(), axis(), axis());
        Self {
            phase,
            orbit_factor,
            speed,
            offset,
        }
    }

    #[inline]
    pub fn position_at(&self, t: f32) -> Vec3 {
        let a = t * self.speed + self.phase;
        let az = t * self.speed * PARTICLE_Z_SPEED_RATIO + self.phase;
        Vec3::new(
            self.offset.x + a.cos() * self.orbit_factor,
            self.offset.y + a.sin() * self.orbit_factor,
            self.offset.z + az.cos() * self.orbit_factor,
        ) / PARTICLE_POSITION_DIVISOR
    }

    /// Euler angles (XYZ order); all three axes spin together.
    #[inline]
    pub fn rotation_at(&self, t: f32) -> Vec3 {
        Vec3::splat(t + self.phase)
    }

    /// Instance transform with `jitter01` in [0, 1) selecting the scale shimmer.
    pub fn transform_at(&self, t: f32, jitter01: f32) -> Mat4 {
        let r = self.rotation_at(t);
        Mat4::from_scale_rotation_translation(
            Vec3::splat(scale_for(jitter01)),
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position_at(t),
        )
    }
}

#[inline]
pub fn scale_for(jitter01: f32) -> f32 {
    PARTICLE_SCALE_BASE + jitter01 * PARTICLE_SCALE_JITTER
}

/// How the per-particle scale jitter is sourced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleJitter {
    /// Fresh random draw for every particle on every frame (visible shimmer).
    #[default]
    PerFrame,
    /// One draw per particle at creation.
    Fixed,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    jitter: ScaleJitter,
    fixed_jitter: Vec<f32>,
    rng: StdRng,
    matrices: Vec<Mat4>,
}

impl ParticleField {
    pub fn new(count: usize, jitter: ScaleJitter, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles: Vec<Particle> = (0..count).map(|_| Particle::random(&mut rng)).collect();
        let fixed_jitter = (0..count).map(|_| rng.gen::<f32>()).collect();
        Self {
            particles,
            jitter,
            fixed_jitter,
            rng,
            matrices: vec![Mat4::IDENTITY; count],
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn jitter(&self) -> ScaleJitter {
        self.jitter
    }

    /// Recompute every instance transform for elapsed time `t`.
    pub fn update(&mut self, t: f32) -> &[Mat4] {
        for (i, (p, m)) in self.particles.iter().zip(self.matrices.iter_mut()).enumerate() {
            let j = match self.jitter {
                ScaleJitter::PerFrame => self.rng.gen::<f32>(),
                ScaleJitter::Fixed => self.fixed_jitter[i],
            };
            *m = p.transform_at(t, j);
        }
        &self.matrices
    }

    pub fn matrices(&self) -> &[Mat4] {
        &self.matrices
    }
}
