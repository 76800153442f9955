//! Mapping simulation state onto a drawing surface.
//!
//! The surface itself is supplied by the windowing layer; this module only
//! decides where, how large, and in which style each body is drawn.

use crate::config::MIN_VISIBLE_SIZE;
use crate::engine::{Rgb, State};
use glam::Vec2;

/// Above this many bodies the outline pass is skipped
pub const AA_MAX_BODIES: usize = 100;

/// Circles with a rounded radius at or below this get no outline
pub const AA_MIN_RADIUS: f32 = 5.0;

pub const BACKGROUND: Rgb = Rgb::BLACK;

/// Drawing primitives provided by the window toolkit
pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn filled_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn aa_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleStyle {
    /// Anti-aliased outline over a filled disc
    Smooth,
    /// Filled disc only
    Plain,
}

impl CircleStyle {
    pub fn for_count(count: usize) -> Self {
        if count <= AA_MAX_BODIES {
            CircleStyle::Smooth
        } else {
            CircleStyle::Plain
        }
    }
}

/// Zoom about a fixed screen center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Vec2,
    pub scale: f32,
}

impl Viewport {
    pub fn new(center: Vec2, scale: f32) -> Self {
        Self { center, scale }
    }

    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        self.center + (world - self.center) * self.scale
    }

    pub fn radius(&self, size: f32) -> f32 {
        (size * self.scale).max(MIN_VISIBLE_SIZE)
    }
}

/// Draw every body in index order
pub fn draw<S: Surface + ?Sized>(state: &State, surface: &mut S, viewport: &Viewport) {
    let style = CircleStyle::for_count(state.count());
    for ((pos, size), color) in state.positions.iter().zip(&state.sizes).zip(&state.colors) {
        let center = viewport.to_screen(*pos);
        let radius = viewport.radius(*size);
        if style == CircleStyle::Smooth && radius.round() > AA_MIN_RADIUS {
            surface.aa_circle(center, radius, *color);
        }
        surface.filled_circle(center, radius, *color);
    }
}

/// Clear to the background, then draw
pub fn render_frame<S: Surface + ?Sized>(state: &State, surface: &mut S, viewport: &Viewport) {
    surface.clear(BACKGROUND);
    draw(state, surface, viewport);
}
