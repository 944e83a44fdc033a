//! Paddle Duel entry point
//!
//! Headless native driver: runs the game with the demo autopilot and logs
//! what would be drawn. See `--help` for the options.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use paddle_duel::platform::{Autopilot, FrameClock};
use paddle_duel::renderer::{Color, DrawList, Renderer};
use paddle_duel::sim::Rect;
use paddle_duel::{GameController, Settings};

/// Headless Paddle Duel demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings JSON file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Serve RNG seed (random when unset)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to run, 0 runs until quit
    #[arg(short, long)]
    frames: Option<u64>,

    /// Pace frames to the frame rate
    #[arg(long)]
    realtime: Option<bool>,
}

impl Args {
    /// Settings file (or defaults) with the command line overrides applied
    fn settings(&self) -> Settings {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path),
            None => Settings::default(),
        };
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(frames) = self.frames {
            settings.demo_frames = frames;
        }
        if let Some(realtime) = self.realtime {
            settings.realtime = realtime;
        }
        settings
    }
}

/// Logs the debug overlay once a second instead of drawing it
struct LogRenderer {
    frame: DrawList,
    log_every: u64,
}

impl LogRenderer {
    fn new(frame_rate: u32) -> Self {
        Self {
            frame: DrawList::default(),
            log_every: u64::from(frame_rate.max(1)),
        }
    }
}

impl Renderer for LogRenderer {
    fn clear(&mut self, color: Color) {
        self.frame.clear(color);
    }

    fn rect(&mut self, rect: Rect, color: Color) {
        self.frame.rect(rect, color);
    }

    fn ellipse(&mut self, bounds: Rect, color: Color) {
        self.frame.ellipse(bounds, color);
    }

    fn text(&mut self, text: &str, color: Color, pos: Vec2) {
        self.frame.text(text, color, pos);
    }

    fn present(&mut self) {
        self.frame.present();
        if self.frame.frames() % self.log_every == 0 {
            if let Some(text) = self.frame.overlay() {
                log::debug!("{}", text);
            }
        }
    }

    fn caption(&mut self, text: &str) {
        log::trace!("{}", text);
    }
}

fn main() {
    let args = Args::parse();
    env_logger::init();
    log::info!("Paddle Duel (headless) starting...");

    let settings = args.settings();

    let mut game = GameController::new(&settings);
    let mut input = Autopilot::default();
    let mut renderer = LogRenderer::new(settings.frame_rate);
    let mut clock = FrameClock::new(settings.frame_rate);
    let clock = settings.realtime.then_some(&mut clock);

    let summary = game.run(&mut input, &mut renderer, clock, settings.demo_frames);
    log::info!(
        "{} frames, {} rounds lost, {} paddle hits",
        summary.frames,
        summary.rounds_lost,
        summary.paddle_hits
    );
}
