//! Interactive run state: pause, reset, zoom and quit.

use crate::config::SimConfig;
use crate::engine::State;
use crate::error::Result;
use crate::generator::{generate_with_rng, BodyCount};
use crate::render::{render_frame, Surface, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Multiplier applied to the scale factor per zoom-out step
pub const ZOOM_STEP: f32 = 0.9;

/// Input the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    TogglePause,
    ZoomIn,
    ZoomOut,
}

pub struct Session {
    config: SimConfig,
    count: BodyCount,
    rng: StdRng,
    state: State,
    running: bool,
    paused: bool,
    scale: f32,
}

impl Session {
    pub fn new(count: BodyCount, seed: u64, config: SimConfig) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = generate_with_rng(count.get(), &mut rng, &config)?;
        Ok(Self {
            config,
            count,
            rng,
            state,
            running: true,
            paused: false,
            scale: 1.0,
        })
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.config.screen_center(), self.scale)
    }

    pub fn apply(&mut self, command: Command) -> Result<()> {
        if !self.running {
            return Ok(());
        }
        match command {
            Command::Quit => {
                log::info!("quit requested");
                self.running = false;
            }
            Command::Reset => {
                self.state = generate_with_rng(self.count.get(), &mut self.rng, &self.config)?;
                self.paused = false;
                log::debug!("reset with {} stars", self.count);
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                log::debug!("paused = {}", self.paused);
            }
            Command::ZoomIn => {
                self.scale /= ZOOM_STEP;
                log::debug!("scale = {:.3}", self.scale);
            }
            Command::ZoomOut => {
                self.scale *= ZOOM_STEP;
                log::debug!("scale = {:.3}", self.scale);
            }
        }
        Ok(())
    }

    /// Advance by dt unless paused, then draw the current state
    pub fn frame<S: Surface + ?Sized>(&mut self, dt: f32, surface: &mut S) {
        if !self.running {
            return;
        }
        if !self.paused {
            self.state.update(dt);
            log::trace!(
                "dt = {:.4}, kinetic energy = {:.1}",
                dt,
                self.state.kinetic_energy()
            );
        }
        render_frame(&self.state, surface, &self.viewport());
    }
}
