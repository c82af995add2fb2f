//! Brick Sweep headless runner
//!
//! Runs the simulation at a fixed timestep with the autopilot driving the
//! paddle, rasterizing every frame into an off-screen pixel buffer.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use clap::Parser;

    use brick_sweep::Settings;
    use brick_sweep::platform::{DemoInput, FrameStats, InputSource, PlatformEvent};
    use brick_sweep::renderer::{PixelBuffer, draw_scene};
    use brick_sweep::sim::{GameState, TickInput, TickReport, tick};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Headless Breakout simulation", long_about = None)]
    struct Args {
        /// JSON settings file; defaults are used when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Stop after this many frames (overrides the settings file)
        #[arg(long)]
        frames: Option<u64>,
        /// Force gamma-corrected output on or off
        #[arg(long)]
        gamma: Option<bool>,
        /// Write the last presented frame as raw RGBA8 bytes, top row first
        #[arg(long)]
        dump_frame: Option<PathBuf>,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let mut settings = match &args.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(frames) = args.frames {
            settings.demo_frames = frames;
        }
        if let Some(gamma) = args.gamma {
            settings.gamma_correct = gamma;
        }
        settings.validate().context("checking settings")?;

        if settings.demo_frames == 0 {
            anyhow::bail!("headless runs need a frame limit (--frames or demo_frames)");
        }

        log::info!("Brick Sweep starting ({} frames)", settings.demo_frames);

        let mut state = GameState::with_ball_velocity(settings.ball_velocity);
        let mut buffer = PixelBuffer::new(settings.window_width, settings.window_height)
            .with_gamma_correction(settings.gamma_correct);
        let mut input = DemoInput::new(settings.demo_frames);
        let mut stats = FrameStats::new();
        let mut totals = TickReport::default();
        let mut events: Vec<PlatformEvent> = Vec::new();

        while state.is_running() {
            let frame_start = Instant::now();

            events.clear();
            input.track(&state);
            input.poll_events(&mut events);

            totals += tick(&mut state, &TickInput::from_events(&events), settings.fixed_dt);
            draw_scene(&state, &mut buffer, &settings.palette);

            stats.record(frame_start.elapsed().as_secs_f64());
            if stats.frame_count % 60 == 0 {
                log::debug!(
                    "frame {}: {:.0} fps ({:.3} ms), {} live entities",
                    stats.frame_count,
                    stats.smoothed_fps,
                    stats.smoothed_frame_time_ms,
                    state.store.live_count()
                );
            }
        }

        log::info!(
            "Finished after {} frames: {} bounces, {} blocks destroyed, {} blocks remaining",
            state.frame,
            totals.bounces,
            totals.blocks_destroyed,
            state.blocks_remaining()
        );

        if let Some(path) = &args.dump_frame {
            std::fs::write(path, buffer.front_rgba8())
                .with_context(|| format!("writing frame to {}", path.display()))?;
            log::info!(
                "Wrote {}x{} RGBA8 frame to {}",
                buffer.width(),
                buffer.height(),
                path.display()
            );
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web target
}
