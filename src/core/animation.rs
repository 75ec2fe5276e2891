// Per-frame animation driver.
//
// The host loop calls [`FrameDriver::step`] once per displayed frame with the
// monotonic time since start; everything the renderer needs for that frame is
// returned in a [`FrameOutput`].

use glam::{EulerRot, Mat4, Vec3};

use super::config::SceneConfig;
use super::constants::{ORB_SPIN_Y, ORB_SPIN_Z, REFERENCE_FPS};
use super::particles::ParticleField;
use super::uniforms::{DitherUniforms, LightOrbit};

/// Monotonic frame clock. Timestamps that go backwards produce a zero delta.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
    elapsed: f64,
    frames: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame: u64,
}

impl FrameClock {
    pub fn tick(&mut self, now_sec: f64) -> FrameTime {
        let delta = match self.last {
            Some(prev) => (now_sec - prev).max(0.0),
            None => 0.0,
        };
        self.last = Some(now_sec.max(self.last.unwrap_or(now_sec)));
        self.elapsed += delta;
        self.frames += 1;
        FrameTime {
            elapsed: self.elapsed as f32,
            delta: delta as f32,
            frame: self.frames,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }
}

/// How the orb's constant spin is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// Fixed increment per rendered frame; speed follows the display refresh rate.
    #[default]
    PerFrame,
    /// Increment scaled by frame delta so a 60 Hz display matches `PerFrame`.
    PerSecond,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbSpin {
    pub rotation: Vec3,
    pub mode: RotationMode,
}

impl OrbSpin {
    pub fn new(mode: RotationMode) -> Self {
        Self {
            rotation: Vec3::ZERO,
            mode,
        }
    }

    pub fn advance(&mut self, delta_sec: f32) {
        let k = match self.mode {
            RotationMode::PerFrame => 1.0,
            RotationMode::PerSecond => delta_sec.max(0.0) * REFERENCE_FPS,
        };
        self.rotation.y += ORB_SPIN_Y * k;
        self.rotation.z += ORB_SPIN_Z * k;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

pub struct FrameOutput<'a> {
    pub time: FrameTime,
    pub orb: DitherUniforms,
    pub debris: DitherUniforms,
    pub instances: &'a [Mat4],
}

/// Owns all mutable animation state of the scene.
pub struct FrameDriver {
    clock: FrameClock,
    spin: OrbSpin,
    orbit: LightOrbit,
    orb: DitherUniforms,
    debris: DitherUniforms,
    particles: ParticleField,
}

impl FrameDriver {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            clock: FrameClock::default(),
            spin: OrbSpin::new(config.rotation),
            orbit: config.light_orbit,
            orb: DitherUniforms::new(&config.orb_palette, config.orb_dither_scale, &config.displacement),
            debris: DitherUniforms::new(
                &config.debris_palette,
                config.debris_dither_scale,
                &config.displacement,
            ),
            particles: ParticleField::new(config.particle_count, config.jitter, config.seed),
        }
    }

    /// Advance to `now_sec` (seconds on any monotonic timeline) for a
    /// `width` x `height` drawing buffer.
    pub fn step(&mut self, now_sec: f64, width: u32, height: u32) -> FrameOutput<'_> {
        let time = self.clock.tick(now_sec);
        self.spin.advance(time.delta);
        self.orb = self
            .orb
            .advance(time.elapsed, &self.orbit)
            .with_model(self.spin.matrix())
            .with_resolution(width, height);
        self.debris = self
            .debris
            .advance(time.elapsed, &self.orbit)
            .with_resolution(width, height);
        let instances = self.particles.update(time.elapsed);
        FrameOutput {
            time,
            orb: self.orb,
            debris: self.debris,
            instances,
        }
    }

    pub fn spin(&self) -> &OrbSpin {
        &self.spin
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}
