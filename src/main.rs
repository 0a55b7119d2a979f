#[cfg(feature = "window")]
mod viewer;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::info;

use duskfall::display::{DEFAULT_HEIGHT, DEFAULT_SCALE, DEFAULT_WIDTH};
use duskfall::export::{export_png, sequence_path};
use duskfall::{FrameRequest, Result};

#[derive(Parser, Debug)]
#[command(name = "duskfall", version, about = "Procedural pixel-art sunset")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the live viewer (needs the `window` feature).
    Run(RunArgs),
    /// Render a single frame to PNG.
    Frame(FrameArgs),
    /// Render a run of frames at a fixed time step to PNGs.
    Sequence(SequenceArgs),
}

/// Scene resolution and presentation scale
#[derive(Args, Debug, Clone, Copy)]
struct SceneArgs {
    /// Scene width in pixels, before upscaling.
    #[arg(long, short = 'W', default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Scene height in pixels, before upscaling.
    #[arg(long, short = 'H', default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Nearest-neighbour upscale factor.
    #[arg(long, short, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(u32).range(1..=64))]
    scale: u32,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame rate cap; 0 renders as fast as possible.
    #[arg(long, default_value_t = 30)]
    fps_cap: u32,

    /// Elapsed time to start the animation at, in seconds.
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Start in fullscreen.
    #[arg(long)]
    fullscreen: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Elapsed time of the frame, in seconds.
    #[arg(long, short, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long, short)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Directory to write the frames into.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames.
    #[arg(long, short = 'n', default_value_t = 60)]
    frames: u32,

    /// Frames per second of animation time.
    #[arg(long, default_value_t = 12.0, value_parser = positive_f64)]
    fps: f64,

    /// Elapsed time of the first frame, in seconds.
    #[arg(long, default_value_t = 0.0)]
    start: f64,
}

fn positive_f64(s: &str) -> std::result::Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("expected a positive number, got {}", s))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(&args),
        Command::Frame(args) => cmd_frame(&args),
        Command::Sequence(args) => cmd_sequence(&args),
    }
}

#[cfg(feature = "window")]
fn cmd_run(args: &RunArgs) -> Result<()> {
    viewer::run(&viewer::ViewerOptions {
        width: args.scene.width,
        height: args.scene.height,
        scale: args.scene.scale,
        fps_cap: args.fps_cap,
        start_seconds: args.start,
        fullscreen: args.fullscreen,
    })
}

#[cfg(not(feature = "window"))]
fn cmd_run(_args: &RunArgs) -> Result<()> {
    Err(duskfall::DuskfallError::FeatureDisabled(
        "the live viewer needs `--features window`",
    ))
}

fn cmd_frame(args: &FrameArgs) -> Result<()> {
    let request = FrameRequest::new(args.scene.width, args.scene.height, args.time)?;
    let frame = request.render();
    export_png(&frame, args.scene.scale, request.elapsed_seconds, &args.out)?;
    info!(
        "wrote {} ({}x{} at {}x)",
        args.out.display(),
        request.width,
        request.height,
        args.scene.scale
    );
    Ok(())
}

fn cmd_sequence(args: &SequenceArgs) -> Result<()> {
    info!(
        "rendering {} frames at {} fps into {}",
        args.frames,
        args.fps,
        args.out_dir.display()
    );
    for i in 0..args.frames {
        let elapsed = args.start + f64::from(i) / args.fps;
        let request = FrameRequest::new(args.scene.width, args.scene.height, elapsed)?;
        let path = sequence_path(&args.out_dir, i);
        export_png(&request.render(), args.scene.scale, request.elapsed_seconds, &path)?;
    }
    info!("done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["duskfall", "frame", "--out", "a.png"]).unwrap();
        let Command::Frame(args) = cli.cmd else {
            panic!("expected frame subcommand");
        };
        assert_eq!(args.scene.width, DEFAULT_WIDTH);
        assert_eq!(args.scene.height, DEFAULT_HEIGHT);
        assert_eq!(args.scene.scale, DEFAULT_SCALE);
        assert_eq!(args.time, 0.0);
    }

    #[test]
    fn test_cli_rejects_zero_size() {
        assert!(Cli::try_parse_from(["duskfall", "frame", "--out", "a.png", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["duskfall", "run", "--scale", "0"]).is_err());
    }

    #[test]
    fn test_cli_sequence() {
        let cli = Cli::try_parse_from([
            "duskfall", "sequence", "--out-dir", "frames", "-n", "5", "--fps", "24", "-W", "64",
        ])
        .unwrap();
        let Command::Sequence(args) = cli.cmd else {
            panic!("expected sequence subcommand");
        };
        assert_eq!(args.frames, 5);
        assert_eq!(args.fps, 24.0);
        assert_eq!(args.scene.width, 64);

        assert!(Cli::try_parse_from(["duskfall", "sequence", "--out-dir", "f", "--fps", "0"]).is_err());
    }

    #[test]
    fn test_cli_run() {
        let cli = Cli::try_parse_from(["duskfall", "run", "--fps-cap", "0", "--start", "90"]).unwrap();
        let Command::Run(args) = cli.cmd else {
            panic!("expected run subcommand");
        };
        assert_eq!(args.fps_cap, 0);
        assert_eq!(args.start, 90.0);
        assert!(!args.fullscreen);
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
