//! Random initial conditions.

use crate::config::SimConfig;
use crate::engine::{Body, Rgb, State};
use crate::error::{Error, Result};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BODY_COUNT: usize = 3;

/// Number of stars in a run, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyCount(usize);

impl BodyCount {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidBodyCount(0));
        }
        Ok(Self(n))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BodyCount {
    fn default() -> Self {
        Self(DEFAULT_BODY_COUNT)
    }
}

impl FromStr for BodyCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::ParseBodyCount(s.to_string()))?;
        if n <= 0 {
            return Err(Error::InvalidBodyCount(n));
        }
        usize::try_from(n)
            .map_err(|_| Error::ParseBodyCount(s.to_string()))
            .map(Self)
    }
}

impl fmt::Display for BodyCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate `n` stars from a seed
pub fn generate(n: usize, seed: u64, config: &SimConfig) -> Result<State> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(n, &mut rng, config)
}

/// Generate `n` stars drawing from a caller-owned RNG
pub fn generate_with_rng<R: Rng>(
    n: usize,
    rng: &mut R,
    config: &SimConfig,
) -> Result<State> {
    let count = BodyCount::new(n)?;
    config.validate()?;

    let bodies: Vec<Body> = (0..count.get())
        .map(|_| Body {
            mass: random_mass(rng, count, config),
            pos: random_position(rng, config.screen_size),
            vel: Vec2::ZERO,
            color: random_color(rng),
        })
        .collect();

    log::debug!("generated {} stars", count);
    Ok(State::with_config(bodies, config))
}

/// Raw mass scaled by 4/n so the total stays roughly constant as n grows
fn random_mass<R: Rng>(rng: &mut R, count: BodyCount, config: &SimConfig) -> f32 {
    let mass = rng.random_range(config.mass_range.clone()) as f32;
    mass * 4.0 / count.get() as f32
}

/// Integer coordinates inside the screen, inset by a 10% margin
fn random_position<R: Rng>(rng: &mut R, screen_size: Vec2) -> Vec2 {
    let (x_min, x_max) = inset(screen_size.x);
    let (y_min, y_max) = inset(screen_size.y);
    Vec2::new(
        rng.random_range(x_min..=x_max) as f32,
        rng.random_range(y_min..=y_max) as f32,
    )
}

/// Bounds of the inset interval along one screen axis
pub fn inset(extent: f32) -> (u32, u32) {
    let extent = extent as u32;
    let margin = extent.div_ceil(10);
    (margin, extent - margin)
}

fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb(rng.random(), rng.random(), rng.random())
}
