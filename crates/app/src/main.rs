use std::{path::PathBuf, str::FromStr, time::Duration};

use analog_clock_core::{
    ClockConfig, ClockError, FixedTimeSource, FrameController, SurfaceSize, SvgSurface,
    SystemTimeSource, Ticker, TimeSnapshot, TimeSource,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() -> analog_clock_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { surface } => run_render(&surface),
        Commands::Run {
            surface,
            frames,
            resize,
        } => run_live(&surface, frames, &resize),
    }
}

fn run_render(args: &SurfaceArgs) -> analog_clock_core::Result<()> {
    tracing::info!(
        width = args.width,
        height = args.height,
        output = ?args.output,
        "rendering single frame"
    );

    let size = args.size();
    let mut controller = FrameController::new(args.config()?, args.time_source()?, size);
    let mut surface = SvgSurface::new(size);
    let layout = controller.on_frame(&mut surface);
    surface.write_to(&args.output)?;

    tracing::info!(radius = layout.radius, "frame written");
    Ok(())
}

fn run_live(
    args: &SurfaceArgs,
    frames: Option<u64>,
    resizes: &[ResizeAt],
) -> analog_clock_core::Result<()> {
    let config = args.config()?;
    let ticker = Ticker::new(Duration::from_millis(config.frame_interval_ms));
    tracing::info!(
        interval = ?ticker.interval(),
        frames,
        resizes = resizes.len(),
        "starting clock"
    );

    let size = args.size();
    let mut controller = FrameController::new(config, args.time_source()?, size);
    let mut surface = SvgSurface::new(size);

    ticker.run(frames, |frame| {
        for resize in resizes.iter().filter(|resize| resize.frame == frame) {
            if surface.size() != resize.size {
                surface.resize(resize.size);
            }
            controller.on_resize(resize.size, &mut surface);
            surface.write_to(&args.output)?;
        }
        controller.on_frame(&mut surface);
        surface.write_to(&args.output)
    })?;

    tracing::info!(frames = controller.frames_rendered(), "clock stopped");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Analog clock face rendered to SVG", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one frame and exit.
    Render {
        #[command(flatten)]
        surface: SurfaceArgs,
    },
    /// Redraw the clock on every tick, rewriting the output file each time.
    Run {
        #[command(flatten)]
        surface: SurfaceArgs,
        /// Stop after this many ticks. Runs until killed when omitted.
        #[arg(long)]
        frames: Option<u64>,
        /// Resize the surface before a tick, as `WIDTHxHEIGHT@FRAME`.
        #[arg(long)]
        resize: Vec<ResizeAt>,
    },
}

#[derive(Args, Debug)]
struct SurfaceArgs {
    #[arg(long, default_value_t = 400.0)]
    width: f32,
    #[arg(long, default_value_t = 400.0)]
    height: f32,
    /// Pin the clock to `YYYY-MM-DDTHH:MM:SS` instead of local time.
    #[arg(long)]
    at: Option<String>,
    /// JSON file overriding font, caption, background or frame interval.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// SVG file to write.
    #[arg(short, long, default_value = "clock.svg")]
    output: PathBuf,
}

impl SurfaceArgs {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }

    fn config(&self) -> analog_clock_core::Result<ClockConfig> {
        match &self.config {
            Some(path) => ClockConfig::load(path),
            None => Ok(ClockConfig::default()),
        }
    }

    fn time_source(&self) -> analog_clock_core::Result<Box<dyn TimeSource>> {
        match &self.at {
            Some(raw) => Ok(Box::new(FixedTimeSource(TimeSnapshot::parse(raw)?))),
            None => Ok(Box::new(SystemTimeSource)),
        }
    }
}

/// Resize event injected before the tick with index `frame`.
#[derive(Debug, Clone, Copy)]
struct ResizeAt {
    size: SurfaceSize,
    frame: u64,
}

impl FromStr for ResizeAt {
    type Err = ClockError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ClockError::from(format!("expected WIDTHxHEIGHT@FRAME, got `{raw}`"));

        let (dimensions, frame) = raw.split_once('@').ok_or_else(invalid)?;
        let (width, height) = dimensions.split_once('x').ok_or_else(invalid)?;

        Ok(Self {
            size: SurfaceSize::new(
                width.trim().parse().map_err(|_| invalid())?,
                height.trim().parse().map_err(|_| invalid())?,
            ),
            frame: frame.trim().parse().map_err(|_| invalid())?,
        })
    }
}
