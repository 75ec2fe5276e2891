use super::animation::RotationMode;
use super::constants::*;
use super::dither::Palette;
use super::i18n::Language;
use super::particles::ScaleJitter;
use super::shading::Displacement;
use super::uniforms::LightOrbit;

pub const MAX_PARTICLES: usize = 1000;

/// Tunables of the background scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub orb_palette: Palette,
    pub orb_dither_scale: f32,
    pub debris_palette: Palette,
    pub debris_dither_scale: f32,
    pub displacement: Displacement,
    pub light_orbit: LightOrbit,
    pub particle_count: usize,
    pub jitter: ScaleJitter,
    pub rotation: RotationMode,
    pub seed: u64,
    pub language: Option<Language>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            orb_palette: Palette::new(ORB_COLOR_DARK, ORB_COLOR_LIGHT),
            orb_dither_scale: ORB_DITHER_SCALE,
            debris_palette: Palette::new(DEBRIS_COLOR_DARK, DEBRIS_COLOR_LIGHT),
            debris_dither_scale: DEBRIS_DITHER_SCALE,
            displacement: Displacement::default(),
            light_orbit: LightOrbit::default(),
            particle_count: PARTICLE_COUNT,
            jitter: ScaleJitter::default(),
            rotation: RotationMode::default(),
            seed: DEFAULT_SEED,
            language: None,
        }
    }
}

impl SceneConfig {
    /// Overlay settings from a URL query string (`?a=1&b=2` or `a=1&b=2`).
    ///
    /// Returns the config plus the keys whose values were rejected. Unknown keys
    /// are ignored.
    pub fn from_query(query: &str) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if !config.apply(key, value) {
                rejected.push(key.to_string());
            }
        }
        (config, rejected)
    }

    /// Apply one setting; `false` when the key is known but the value is invalid.
    fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
            "lang" => match value.parse::<Language>() {
                Ok(lang) => self.language = Some(lang),
                Err(_) => return false,
            },
            "particles" => match value.parse::<usize>() {
                Ok(n) if n <= MAX_PARTICLES => self.particle_count = n,
                _ => return false,
            },
            "dither" => match value.parse::<f32>() {
                Ok(s) if s.is_finite() && s > 0.0 => self.orb_dither_scale = s,
                _ => return false,
            },
            "amplitude" => match value.parse::<f32>() {
                Ok(a) if a.is_finite() => self.displacement.amplitude = a,
                _ => return false,
            },
            "seed" => match value.parse::<u64>() {
                Ok(s) => self.seed = s,
                Err(_) => return false,
            },
            "spin" => match value {
                "frame" => self.rotation = RotationMode::PerFrame,
                "time" => self.rotation = RotationMode::PerSecond,
                _ => return false,
            },
            "jitter" => match value {
                "frame" => self.jitter = ScaleJitter::PerFrame,
                "fixed" => self.jitter = ScaleJitter::Fixed,
                _ => return false,
            },
            _ => {}
        }
        true
    }
}
