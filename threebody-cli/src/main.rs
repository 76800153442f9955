use anyhow::Result;
use clap::Parser;
use eframe::egui;
use threebody_core::config::{MinDistance, SimConfig, DEFAULT_FPS, DEFAULT_GRAVITY, DEFAULT_MIN_DISTANCE};
use threebody_core::{BodyCount, Session};

mod app;

use app::ThreeBodyApp;

#[derive(Parser)]
#[command(name = "threebody")]
#[command(about = "Toy N-body gravity simulation", long_about = None)]
struct Cli {
    /// Number of stars to simulate
    #[arg(default_value = "3")]
    number_of_stars: BodyCount,

    /// Seed for the initial conditions (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Gravitational constant
    #[arg(long, default_value_t = DEFAULT_GRAVITY)]
    gravity: f32,

    /// Separation below which pull stops growing
    #[arg(long, default_value_t = DEFAULT_MIN_DISTANCE)]
    min_distance: f32,

    /// Use the largest star's radius as the minimum separation
    #[arg(long, conflicts_with = "min_distance")]
    min_distance_from_size: bool,

    /// Target frame rate
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
}

impl Cli {
    fn config(&self) -> SimConfig {
        let min_distance = if self.min_distance_from_size {
            MinDistance::LargestBody
        } else {
            MinDistance::Fixed(self.min_distance)
        };
        SimConfig {
            gravity: self.gravity,
            min_distance,
            fps: self.fps,
            ..SimConfig::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.config();
    config.validate()?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting with {} stars, seed {}",
        cli.number_of_stars,
        seed
    );

    let session = Session::new(cli.number_of_stars, seed, config)?;
    let size = session.config().screen_size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size.x, size.y])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "threebody",
        options,
        Box::new(move |_cc| Ok(Box::new(ThreeBodyApp::new(session)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {}", e))?;

    Ok(())
}
