use crate::config::{size_from_mass, MinDistance, SimConfig};
use glam::Vec2;

/// Below this separation the direction between two bodies is meaningless
pub const DEGENERATE_DISTANCE: f32 = 1.0;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// A star as supplied to `State::from_bodies`
#[derive(Debug, Clone)]
pub struct Body {
    pub mass: f32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
}

impl Body {
    pub fn at_rest(mass: f32, pos: Vec2) -> Self {
        Self {
            mass,
            pos,
            vel: Vec2::ZERO,
            color: Rgb::WHITE,
        }
    }
}

/// Gravitational coefficient per unordered pair, stored once for `i < j`
#[derive(Debug, Clone)]
pub struct PairFactors {
    count: usize,
    values: Vec<f32>,
}

impl PairFactors {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            values: vec![0.0; count * count.saturating_sub(1) / 2],
        }
    }

    /// Packed row-major upper triangle index; requires `i < j < count`
    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < j && j < self.count);
        i * self.count - i * (i + 1) / 2 + (j - i - 1)
    }

    /// Factor for a pair, in either order.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f32 {
        assert_ne!(i, j, "a body has no pair factor with itself");
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        self.values[self.index(lo, hi)]
    }

    fn set(&mut self, i: usize, j: usize, value: f32) {
        let idx = self.index(i, j);
        self.values[idx] = value;
    }

    /// Number of stored pairs
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The whole simulation, one index-aligned entry per body.
///
/// Bodies are kept sorted by descending mass so that the largest are
/// painted first.
#[derive(Debug, Clone)]
pub struct State {
    pub masses: Vec<f32>,
    pub sizes: Vec<f32>,
    pub positions: Vec<Vec2>,
    pub velocities: Vec<Vec2>,
    pub accelerations: Vec<Vec2>,
    pub colors: Vec<Rgb>,
    pub pair_factors: PairFactors,
    pub gravity: f32,
    pub min_distance_squared: f32,
}

impl State {
    /// Build a state from explicit bodies, sorting them by descending mass
    pub fn from_bodies(mut bodies: Vec<Body>, gravity: f32, min_distance: MinDistance) -> Self {
        bodies.sort_by(|a, b| b.mass.total_cmp(&a.mass));

        let count = bodies.len();
        let masses: Vec<f32> = bodies.iter().map(|b| b.mass).collect();
        let sizes: Vec<f32> = masses.iter().map(|&m| size_from_mass(m)).collect();
        let min_distance_squared = min_distance.squared(&sizes);

        Self {
            positions: bodies.iter().map(|b| b.pos).collect(),
            velocities: bodies.iter().map(|b| b.vel).collect(),
            accelerations: vec![Vec2::ZERO; count],
            colors: bodies.iter().map(|b| b.color).collect(),
            pair_factors: PairFactors::new(count),
            masses,
            sizes,
            gravity,
            min_distance_squared,
        }
    }

    /// Same as `from_bodies`, taking the constants from a config
    pub fn with_config(bodies: Vec<Body>, config: &SimConfig) -> Self {
        Self::from_bodies(bodies, config.gravity, config.min_distance)
    }

    /// Number of bodies
    pub fn count(&self) -> usize {
        self.masses.len()
    }

    /// Recompute `G / max(d², min_d²)` for every unordered pair
    pub fn refresh_pair_factors(&mut self) {
        let n = self.count();
        for i in 0..n {
            for j in (i + 1)..n {
                let dist_sq = self.positions[i].distance_squared(self.positions[j]);
                let clamped = dist_sq.max(self.min_distance_squared);
                self.pair_factors.set(i, j, self.gravity / clamped);
            }
        }
    }

    /// Accumulate each body's acceleration from the cached pair factors
    pub fn compute_accelerations(&mut self) {
        let n = self.count();
        for i in 0..n {
            let mut accel = Vec2::ZERO;
            for j in 0..n {
                if i == j {
                    continue;
                }
                let r = self.positions[j] - self.positions[i];
                if r.length() <= DEGENERATE_DISTANCE {
                    continue;
                }
                accel += r.normalize() * (self.masses[j] * self.pair_factors.get(i, j));
            }
            self.accelerations[i] = accel;
        }
    }

    pub fn total_mass(&self) -> f32 {
        self.masses.iter().sum()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.masses
            .iter()
            .zip(&self.velocities)
            .map(|(m, v)| 0.5 * m * v.length_squared())
            .sum()
    }

    pub fn momentum(&self) -> Vec2 {
        self.masses
            .iter()
            .zip(&self.velocities)
            .map(|(&m, &v)| v * m)
            .sum()
    }

    /// Mass-weighted mean position, `None` when the total mass is zero
    pub fn center_of_mass(&self) -> Option<Vec2> {
        let total = self.total_mass();
        if total == 0.0 {
            return None;
        }
        let weighted: Vec2 = self
            .masses
            .iter()
            .zip(&self.positions)
            .map(|(&m, &p)| p * m)
            .sum();
        Some(weighted / total)
    }
}
