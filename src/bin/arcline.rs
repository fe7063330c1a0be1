use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arcline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the resting frame as a PNG.
    Frame(FrameArgs),
    /// Simulate taps and write a PNG per repaint.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Optional config JSON; unspecified fields fall back to defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Output directory for the frame sequence.
    #[arg(long = "out-dir")]
    out_dir: PathBuf,

    /// Number of taps (animation bursts) to simulate.
    #[arg(long, default_value_t = 1)]
    taps: u32,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Optional config JSON; unspecified fields fall back to defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sleep the configured tick interval between frames.
    #[arg(long)]
    realtime: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<arcline::Config> {
    let Some(path) = path else {
        return Ok(arcline::Config::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: arcline::Config = serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(cfg)
}

fn write_png(path: &Path, pixmap: &vello_cpu::Pixmap, width: u32, height: u32) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        pixmap.data_as_u8_slice(),
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let canvas = arcline::Canvas::new(args.width, args.height)?;
    let mut stage = arcline::Stage::new(canvas, cfg)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, stage.frame(), args.width, args.height)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let interval = cfg.tick_interval();
    let canvas = arcline::Canvas::new(args.width, args.height)?;
    let mut stage = arcline::Stage::new(canvas, cfg)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut frame_no = 0u32;
    for tap in 0..args.taps {
        let ticks = stage.run_burst(|pixmap| {
            let path = args.out_dir.join(format!("frame_{frame_no:05}.png"));
            write_png(&path, pixmap, args.width, args.height)?;
            frame_no += 1;
            if args.realtime {
                pace(interval);
            }
            Ok(())
        })?;
        tracing::info!(tap, ticks, "burst complete");
    }

    eprintln!(
        "wrote {} frames to {}",
        frame_no,
        args.out_dir.display()
    );
    Ok(())
}

fn pace(interval: Duration) {
    std::thread::sleep(interval);
}
