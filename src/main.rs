use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail, ensure};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use carousel::constants::*;
use carousel::slide::{shuffle_slides, slides_from};
use carousel::{CarouselController, Ticker};

mod engine;
mod picture;
mod texture_loader;

use crate::engine::HeroEngine;
use crate::picture::Picture;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(about = "Autoplay hero carousel over a directory of images")]
struct Args {
    /// Directory holding the slide images (png, jpg, jpeg, bmp, gif)
    image_directory: PathBuf,

    /// Milliseconds between autoplay ticks
    #[arg(long, default_value_t = TICK_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Progress added per tick, out of 100
    #[arg(long, default_value_t = TICK_DELTA)]
    step: f32,

    /// Start with autoplay paused
    #[arg(long)]
    paused: bool,

    /// Show slides in random order
    #[arg(long)]
    shuffle: bool,

    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    height: i32,
}

impl Args {
    fn validate(&self) -> Result<()> {
        ensure!(self.interval_ms > 0, "--interval-ms must be greater than zero");
        ensure!(self.step.is_finite() && self.step > 0.0, "--step must be a positive number");
        ensure!(self.width > 0 && self.height > 0, "window size must be positive");
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    args.validate()?;

    let image_paths = load_sorted_image_paths(&args.image_directory)?;
    info!(directory = %args.image_directory.display(), images = image_paths.len(), "found images");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Hero Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut pictures = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => pictures.push(Picture::new(texture, path)),
            Err(e) => warn!(error = %e, "skipping image"),
        }
    }
    if pictures.is_empty() {
        bail!("none of the images in {} could be loaded", args.image_directory.display());
    }

    let mut slides = slides_from(pictures);
    if args.shuffle {
        shuffle_slides(&mut slides, &mut rand::rng());
    }
    let mut carousel = CarouselController::new(slides)?;
    if args.paused {
        carousel.toggle_autoplay();
    }

    let ticker = Ticker::new(Duration::from_millis(args.interval_ms), args.step)?;
    info!(dwell_ms = ticker.dwell_time().as_millis() as u64, "slide dwell time");
    let mut engine = HeroEngine::new(carousel, ticker);

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.handle_input(&rl);
        engine.update(dt);

        let mut d = rl.begin_drawing(&thread);
        engine.draw(&mut d);
    }

    // textures and the autoplay timer go before the window
    drop(engine);
    info!("carousel closed");
    Ok(())
}
