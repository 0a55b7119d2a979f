//! Live SDL2 viewer: drives the scheduler, hands each frame to the display
//! and reacts to keys and window resizes.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use sdl2::keyboard::Keycode;

use duskfall::display::{Display, InputEvent, RenderTarget, MAX_SCALE};
use duskfall::export::{export_png, timestamped_path};
use duskfall::scheduler::Scheduler;
use duskfall::util::FpsCounter;
use duskfall::{render_frame, DuskfallError, PixelBuffer, Result};

/// How often the frame rate goes to the debug log
const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(5);

pub struct ViewerOptions {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub fps_cap: u32,
    pub start_seconds: f64,
    pub fullscreen: bool,
}

/// Scene size that fills a drawable area at a given scale
fn scene_size(output: (u32, u32), scale: u32) -> (u32, u32) {
    let scale = scale.max(1);
    ((output.0 / scale).max(1), (output.1 / scale).max(1))
}

/// Initial window size for a scene shown at `scale`
fn window_size(width: u32, height: u32, scale: u32) -> Result<(u32, u32)> {
    match (width.checked_mul(scale), height.checked_mul(scale)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(DuskfallError::InvalidSize {
            width: width.saturating_mul(scale),
            height: height.saturating_mul(scale),
        }),
    }
}

pub fn run(opts: &ViewerOptions) -> Result<()> {
    let mut scale = opts.scale.clamp(1, MAX_SCALE);
    let (window_w, window_h) = window_size(opts.width, opts.height, scale)?;
    let (mut display, texture_creator) =
        Display::with_options("duskfall", window_w, window_h, opts.fullscreen)?;

    let (mut width, mut height) = scene_size(display.output_size()?, scale);
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut scheduler = Scheduler::new(Some(opts.fps_cap), opts.start_seconds);
    let mut fps_counter = FpsCounter::new(60);
    let mut last_tick = Instant::now();
    let mut last_report = Instant::now();
    let mut current: Option<PixelBuffer> = None;

    info!("=== duskfall ===");
    info!("Scene: {}x{} at {}x", width, height, scale);
    info!("Controls: Space pause, F/F11 fullscreen, P export, +/- scale, Esc quit");

    'main: loop {
        let mut resized = false;

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::Resized => resized = true,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Space => {
                        scheduler.toggle_pause();
                        info!("{}", if scheduler.is_paused() { "Paused" } else { "Resumed" });
                    },
                    Keycode::F | Keycode::F11 => {
                        display.toggle_fullscreen()?;
                        info!("Fullscreen {}", if display.is_fullscreen() { "on" } else { "off" });
                        resized = true;
                    },
                    Keycode::P => {
                        if let Some(frame) = &current {
                            let path = timestamped_path(Path::new("."), scheduler.elapsed());
                            match export_png(frame, scale, scheduler.elapsed(), &path) {
                                Ok(_) => info!("Exported {}", path.display()),
                                Err(e) => warn!("Export failed: {}", e),
                            }
                        }
                    },
                    Keycode::Equals | Keycode::Plus | Keycode::KpPlus => {
                        scale = (scale + 1).min(MAX_SCALE);
                        resized = true;
                    },
                    Keycode::Minus | Keycode::KpMinus => {
                        scale = scale.saturating_sub(1).max(1);
                        resized = true;
                    },
                    _ => {},
                },
            }
        }

        if resized {
            let size = scene_size(display.output_size()?, scale);
            if size != target.size() {
                (width, height) = size;
                target = RenderTarget::with_size(&texture_creator, width, height)?;
                info!("Scene: {}x{} at {}x", width, height, scale);
            }
            scheduler.request_redraw();
        }

        let now = Instant::now();
        let dt = now - last_tick;
        last_tick = now;

        let Some(elapsed) = scheduler.advance(dt) else {
            thread::sleep(Duration::from_millis(1));
            continue;
        };

        let frame = render_frame(width, height, elapsed);
        display.present(&mut target, &frame, scale)?;
        current = Some(frame);

        let (_, _, avg_fps) = fps_counter.tick();
        if last_report.elapsed() >= FPS_REPORT_INTERVAL {
            let (min_fps, max_fps) = fps_counter.min_max_fps();
            debug!(
                "FPS {:.1} avg  {:.1} min  {:.1} max  {:.1}ms  t={:.1}s",
                avg_fps,
                min_fps,
                max_fps,
                fps_counter.avg_frame_time_ms(),
                elapsed
            );
            last_report = Instant::now();
        }
    }

    Ok(())
}
