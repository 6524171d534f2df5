//! Star field generation by rejection sampling
//!
//! Candidates are drawn one at a time and kept only if their full pulse
//! radius clears every star accepted so far. Nothing bounds the number of
//! attempts unless `max_attempts` is set.

use glam::Vec2;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use thiserror::Error;

use super::rect::Rect;
use super::star::{Star, max_radius};
use crate::color::palette::STAR_COLORS;
use crate::consts::{STAR_COUNT, WORLD_HEIGHT, WORLD_WIDTH};

/// A normal distribution whose samples are clamped to `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampedNormal {
    pub mean: f32,
    pub dev: f32,
    pub min: f32,
    pub max: f32,
}

impl ClampedNormal {
    pub const fn new(mean: f32, dev: f32, min: f32, max: f32) -> Self {
        Self {
            mean,
            dev,
            min,
            max,
        }
    }

    fn sampler(&self, name: &'static str) -> Result<ClampedSampler, SpawnError> {
        if !(self.min <= self.max) {
            return Err(SpawnError::InvalidBounds {
                name,
                min: self.min,
                max: self.max,
            });
        }
        if !(self.dev.is_finite() && self.dev >= 0.0) {
            return Err(SpawnError::InvalidDeviation { name, dev: self.dev });
        }
        let normal = Normal::new(self.mean, self.dev)
            .map_err(|_| SpawnError::InvalidDeviation { name, dev: self.dev })?;
        Ok(ClampedSampler {
            normal,
            min: self.min,
            max: self.max,
        })
    }
}

struct ClampedSampler {
    normal: Normal<f32>,
    min: f32,
    max: f32,
}

impl ClampedSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.normal.sample(rng).clamp(self.min, self.max)
    }

    /// Truncate toward zero first, then clamp to the whole numbers in range
    fn sample_count<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.normal
            .sample(rng)
            .trunc()
            .clamp(self.min.ceil(), self.max.floor()) as u32
    }
}

/// Distribution parameters for every star attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldParams {
    pub count: usize,
    pub world_width: f32,
    pub world_height: f32,
    pub radius: ClampedNormal,
    pub inner_ratio: ClampedNormal,
    /// Sampled as a float, truncated, then clamped to the whole numbers in range
    pub flares: ClampedNormal,
    pub color_freq: ClampedNormal,
    pub radius_amplitude: ClampedNormal,
    pub radius_freq: ClampedNormal,
    /// Give up after this many candidates; `None` keeps sampling forever
    pub max_attempts: Option<u64>,
}

impl Default for StarFieldParams {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            radius: ClampedNormal::new(160.0, 90.0, 40.0, 300.0),
            inner_ratio: ClampedNormal::new(0.4, 0.25, 0.15, 0.8),
            flares: ClampedNormal::new(6.5, 2.0, 3.0, 10.0),
            color_freq: ClampedNormal::new(1.6, 1.0, 0.6, 4.0),
            radius_amplitude: ClampedNormal::new(0.5, 0.3, 0.1, 0.9),
            radius_freq: ClampedNormal::new(1.8, 1.0, 0.6, 4.0),
            max_attempts: None,
        }
    }
}

impl StarFieldParams {
    /// World rectangle centered on the origin
    pub fn world_rect(&self) -> Rect {
        Rect::from_center(Vec2::ZERO, self.world_width / 2.0, self.world_height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpawnError {
    #[error("world must have positive area, got {width}x{height}")]
    EmptyWorld { width: f32, height: f32 },
    #[error("{name}: min {min} exceeds max {max}")]
    InvalidBounds { name: &'static str, min: f32, max: f32 },
    #[error("{name}: deviation {dev} is not a finite non-negative number")]
    InvalidDeviation { name: &'static str, dev: f32 },
    #[error("flare count must be at least 1, got min {min}")]
    TooFewFlares { min: f32 },
    #[error("placed {placed} of {target} stars before giving up after {attempts} attempts")]
    Exhausted {
        placed: usize,
        target: usize,
        attempts: u64,
    },
}

/// Owns every star in the demo
#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Star>,
    /// Candidates drawn while generating, accepted or not
    attempts: u64,
}

impl StarField {
    /// Rejection-sample `params.count` non-overlapping stars
    pub fn generate<R: Rng + ?Sized>(
        params: &StarFieldParams,
        rng: &mut R,
    ) -> Result<Self, SpawnError> {
        if !(params.world_width > 0.0 && params.world_height > 0.0) {
            return Err(SpawnError::EmptyWorld {
                width: params.world_width,
                height: params.world_height,
            });
        }
        if params.flares.min < 1.0 {
            return Err(SpawnError::TooFewFlares {
                min: params.flares.min,
            });
        }

        let radius = params.radius.sampler("radius")?;
        let inner_ratio = params.inner_ratio.sampler("inner_ratio")?;
        let flares = params.flares.sampler("flares")?;
        if params.flares.min.ceil() > params.flares.max.floor() {
            return Err(SpawnError::InvalidBounds {
                name: "flares",
                min: params.flares.min,
                max: params.flares.max,
            });
        }
        let color_freq = params.color_freq.sampler("color_freq")?;
        let amplitude = params.radius_amplitude.sampler("radius_amplitude")?;
        let radius_freq = params.radius_freq.sampler("radius_freq")?;

        let half_w = params.world_width / 2.0;
        let half_h = params.world_height / 2.0;

        let mut stars: Vec<Star> = Vec::with_capacity(params.count);
        let mut attempts = 0u64;

        while stars.len() < params.count {
            if let Some(limit) = params.max_attempts {
                if attempts >= limit {
                    log::warn!(
                        "Star field exhausted: {}/{} stars after {} attempts",
                        stars.len(),
                        params.count,
                        attempts
                    );
                    return Err(SpawnError::Exhausted {
                        placed: stars.len(),
                        target: params.count,
                        attempts,
                    });
                }
            }
            attempts += 1;

            let rad = radius.sample(rng);
            let pos = Vec2::new(
                rng.random_range(-half_w..half_w),
                rng.random_range(-half_h..half_h),
            );
            let radius_amplitude = amplitude.sample(rng);
            let max_rad = max_radius(rad, radius_amplitude);

            if stars
                .iter()
                .any(|s| s.pos.distance(pos) < max_rad + s.max_radius())
            {
                continue;
            }

            let color_index = rng.random_range(0..STAR_COLORS.len());
            stars.push(Star {
                pos,
                radius: rad,
                inner_ratio: inner_ratio.sample(rng),
                flares: flares.sample_count(rng),
                base_color: STAR_COLORS[color_index],
                color_freq: color_freq.sample(rng),
                color_phase: rng.random_range(0.0..TAU),
                radius_amplitude,
                radius_freq: radius_freq.sample(rng),
                radius_phase: rng.random_range(0.0..TAU),
                time: 0.0,
            });
        }

        log::info!(
            "Spawned {} stars in {} attempts ({} rejected)",
            stars.len(),
            attempts,
            attempts - stars.len() as u64
        );

        Ok(Self { stars, attempts })
    }

    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self { stars, attempts: 0 }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Advance every star's animation clock
    pub fn update(&mut self, dt: f32) {
        for star in &mut self.stars {
            star.update(dt);
        }
    }

    /// Stars whose bounding rect overlaps `viewport`
    pub fn visible<'a>(&'a self, viewport: &'a Rect) -> impl Iterator<Item = &'a Star> + 'a {
        self.stars
            .iter()
            .filter(move |s| s.bounding_rect().overlaps(viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn small_params(count: usize) -> StarFieldParams {
        StarFieldParams {
            count,
            world_width: 6000.0,
            world_height: 4000.0,
            max_attempts: Some(200_000),
            ..Default::default()
        }
    }

    fn assert_no_overlap(field: &StarField) {
        let stars = field.stars();
        for (i, a) in stars.iter().enumerate() {
            for b in &stars[i + 1..] {
                let dist = a.pos.distance(b.pos);
                assert!(
                    dist >= a.max_radius() + b.max_radius(),
                    "stars at {:?} and {:?} overlap",
                    a.pos,
                    b.pos
                );
            }
        }
    }

    #[test]
    fn test_generate_reaches_target_count() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let field = StarField::generate(&small_params(40), &mut rng).unwrap();
        assert_eq!(field.len(), 40);
        assert!(field.attempts() >= 40);
        assert_no_overlap(&field);
    }

    #[test]
    fn test_attributes_within_bounds() {
        let params = small_params(60);
        let mut rng = Pcg32::seed_from_u64(7);
        let field = StarField::generate(&params, &mut rng).unwrap();
        let world = params.world_rect();

        for s in field.stars() {
            assert!(world.contains_point(s.pos));
            assert!((40.0..=300.0).contains(&s.radius));
            assert!((0.15..=0.8).contains(&s.inner_ratio));
            assert!((3..=10).contains(&s.flares));
            assert!((0.6..=4.0).contains(&s.color_freq));
            assert!((0.1..=0.9).contains(&s.radius_amplitude));
            assert!((0.6..=4.0).contains(&s.radius_freq));
            assert!((0.0..TAU).contains(&s.color_phase));
            assert!((0.0..TAU).contains(&s.radius_phase));
            assert!(STAR_COLORS.contains(&s.base_color));
            assert_eq!(s.time, 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let params = small_params(25);
        let a = StarField::generate(&params, &mut Pcg32::seed_from_u64(99)).unwrap();
        let b = StarField::generate(&params, &mut Pcg32::seed_from_u64(99)).unwrap();
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = Pcg32::seed_from_u64(1);
        let field = StarField::generate(&small_params(0), &mut rng).unwrap();
        assert!(field.is_empty());
        assert_eq!(field.attempts(), 0);
    }

    #[test]
    fn test_overcrowded_world_exhausts() {
        let params = StarFieldParams {
            count: 50,
            world_width: 500.0,
            world_height: 500.0,
            max_attempts: Some(5_000),
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        match StarField::generate(&params, &mut rng) {
            Err(SpawnError::Exhausted {
                placed,
                target,
                attempts,
            }) => {
                assert!(placed < target);
                assert_eq!(target, 50);
                assert_eq!(attempts, 5_000);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut rng = Pcg32::seed_from_u64(1);

        let empty = StarFieldParams {
            world_width: 0.0,
            ..small_params(1)
        };
        assert!(matches!(
            StarField::generate(&empty, &mut rng),
            Err(SpawnError::EmptyWorld { .. })
        ));

        let inverted = StarFieldParams {
            radius: ClampedNormal::new(160.0, 90.0, 300.0, 40.0),
            ..small_params(1)
        };
        assert!(matches!(
            StarField::generate(&inverted, &mut rng),
            Err(SpawnError::InvalidBounds { name: "radius", .. })
        ));

        let negative_dev = StarFieldParams {
            color_freq: ClampedNormal::new(1.0, -1.0, 0.6, 4.0),
            ..small_params(1)
        };
        assert!(matches!(
            StarField::generate(&negative_dev, &mut rng),
            Err(SpawnError::InvalidDeviation { name: "color_freq", .. })
        ));
    }

    #[test]
    fn test_fractional_flare_bounds_stay_in_range() {
        let params = StarFieldParams {
            flares: ClampedNormal::new(2.0, 3.0, 2.5, 4.5),
            ..small_params(40)
        };
        let mut rng = Pcg32::seed_from_u64(11);
        let field = StarField::generate(&params, &mut rng).unwrap();
        assert!(field.stars().iter().all(|s| (3..=4).contains(&s.flares)));

        let no_whole_number = StarFieldParams {
            flares: ClampedNormal::new(3.5, 1.0, 3.2, 3.8),
            ..small_params(1)
        };
        assert!(matches!(
            StarField::generate(&no_whole_number, &mut rng),
            Err(SpawnError::InvalidBounds { name: "flares", .. })
        ));
    }

    #[test]
    fn test_nan_deviation_rejected() {
        let params = StarFieldParams {
            radius_freq: ClampedNormal::new(1.8, f32::NAN, 0.6, 4.0),
            ..small_params(1)
        };
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(matches!(
            StarField::generate(&params, &mut rng),
            Err(SpawnError::InvalidDeviation { name: "radius_freq", .. })
        ));
    }

    #[test]
    fn test_visible_culls_offscreen() {
        let mut rng = Pcg32::seed_from_u64(42);
        let field = StarField::generate(&small_params(30), &mut rng).unwrap();

        let everything = Rect::from_center(Vec2::ZERO, 1e6, 1e6);
        assert_eq!(field.visible(&everything).count(), 30);

        let nowhere = Rect::from_center(Vec2::new(1e6, 1e6), 10.0, 10.0);
        assert_eq!(field.visible(&nowhere).count(), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_accepted_stars_never_overlap(seed in any::<u64>(), count in 1usize..60) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let field = StarField::generate(&small_params(count), &mut rng).unwrap();
            prop_assert_eq!(field.len(), count);
            let stars = field.stars();
            for (i, a) in stars.iter().enumerate() {
                for b in &stars[i + 1..] {
                    prop_assert!(a.pos.distance(b.pos) >= a.max_radius() + b.max_radius());
                }
            }
        }
    }
}
