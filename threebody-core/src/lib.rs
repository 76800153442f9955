pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod integrator;
pub mod render;
pub mod session;

pub use clock::FrameClock;
pub use config::{MinDistance, SimConfig};
pub use engine::{Body, PairFactors, Rgb, State};
pub use error::{Error, Result};
pub use generator::{generate, generate_with_rng, BodyCount};
pub use integrator::update;
pub use render::{draw, render_frame, CircleStyle, Surface, Viewport};
pub use session::{Command, Session};
