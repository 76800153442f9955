//! Simulation constants and their defaults.

use crate::error::{Error, Result};
use glam::Vec2;
use std::ops::RangeInclusive;

/// Gravitational constant in screen units
pub const DEFAULT_GRAVITY: f32 = 900.0;

/// Closest separation used when computing pair factors
pub const DEFAULT_MIN_DISTANCE: f32 = 50.0;

pub const DEFAULT_FPS: u32 = 60;

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Narrowest screen that still leaves room inside the spawn margin
const MIN_SCREEN_EXTENT: f32 = 10.0;

/// Smallest radius a body is ever drawn with
pub const MIN_VISIBLE_SIZE: f32 = 3.0;

/// Mass units per pixel of display radius
pub const MASS_PER_SIZE: f32 = 50.0;

/// How the distance floor for the pair factor is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinDistance {
    /// A fixed separation, squared before use
    Fixed(f32),
    /// The display radius of the largest body
    LargestBody,
}

impl MinDistance {
    /// Resolve the squared floor for a set of display sizes
    pub fn squared(&self, sizes: &[f32]) -> f32 {
        match self {
            MinDistance::Fixed(d) => d * d,
            MinDistance::LargestBody => {
                let largest = sizes.iter().copied().fold(MIN_VISIBLE_SIZE, f32::max);
                largest * largest
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub gravity: f32,
    pub min_distance: MinDistance,
    pub screen_size: Vec2,
    /// Raw mass draw, before scaling by `4 / n`
    pub mass_range: RangeInclusive<u32>,
    pub fps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            min_distance: MinDistance::Fixed(DEFAULT_MIN_DISTANCE),
            screen_size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            mass_range: 1000..=4000,
            fps: DEFAULT_FPS,
        }
    }
}

impl SimConfig {
    /// Reject non-positive or non-finite constants and empty ranges
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(Error::config(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if let MinDistance::Fixed(d) = self.min_distance {
            if !d.is_finite() || d <= 0.0 {
                return Err(Error::config(format!(
                    "minimum distance must be positive, got {}",
                    d
                )));
            }
        }
        if !(self.screen_size.x >= MIN_SCREEN_EXTENT && self.screen_size.y >= MIN_SCREEN_EXTENT) {
            return Err(Error::config(format!(
                "screen size must be at least 10x10, got {}x{}",
                self.screen_size.x, self.screen_size.y
            )));
        }
        if self.mass_range.is_empty() {
            return Err(Error::config("mass range is empty"));
        }
        if self.fps == 0 {
            return Err(Error::config("fps must be at least 1"));
        }
        Ok(())
    }

    pub fn screen_center(&self) -> Vec2 {
        self.screen_size / 2.0
    }
}

/// Display radius for a mass: linear, floored so small bodies stay visible
pub fn size_from_mass(mass: f32) -> f32 {
    (mass / MASS_PER_SIZE).max(MIN_VISIBLE_SIZE)
}
