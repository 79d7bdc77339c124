use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};
use raylib::prelude::*;
use simple_logger::SimpleLogger;

use carousel::config::{Config, Overrides};
use carousel::texture_loader::load_slide_textures;
use carousel::view::CarouselView;
use carousel::{Carousel, CarouselEvent, default_slides};

/// Image carousel with autoplay, arrow and indicator navigation, and pause on hover.
#[derive(Parser)]
#[command(name = "carousel", version)]
struct Cli {
    /// Directory slide sources are resolved against
    assets_dir: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Autoplay interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Cross-fade duration in milliseconds
    #[arg(long)]
    fade_ms: Option<u64>,

    /// Window width
    #[arg(long)]
    width: Option<i32>,

    /// Window height
    #[arg(long)]
    height: Option<i32>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("Failed to initialize logger")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .apply(Overrides {
        assets_dir: cli.assets_dir,
        interval_ms: cli.interval_ms,
        fade_ms: cli.fade_ms,
        width: cli.width,
        height: cli.height,
    })?;
    debug!("Settings: {:?}", config);

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Build Widget ---
    let slides = default_slides();
    let textures = load_slide_textures(&mut rl, &thread, &config.assets_dir, &slides);
    let mut carousel = Carousel::new(slides, config.interval())
        .context("Failed to build carousel")?;

    carousel.subscribe(|event| {
        if let CarouselEvent::SlideChanged { from, to, cause } = event {
            debug!("Slide {} -> {} ({:?})", from, to, cause);
        }
    });

    let screen_size = (rl.get_screen_width(), rl.get_screen_height());
    let mut view = CarouselView::new(&mut carousel, textures, config.fade_duration(), screen_size);

    info!("Showing {} slides from {}", carousel.len(), config.assets_dir.display());
    carousel.mount();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));

        view.handle_input(&rl, &mut carousel);
        carousel.update(dt);
        view.update(dt);

        let mut d = rl.begin_drawing(&thread);
        view.draw(&mut d, &carousel);
    }

    carousel.unmount();
    Ok(())
}
