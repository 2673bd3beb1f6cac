use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use coachmarks::{
    ArrowPosition, BubbleMetrics, EventLog, FixedAdvanceMeasurer, ManualScheduler,
    OverlayController, ParleyMeasurer, RecordingSurface, Rect, Size, TextMeasurer, TextStyle,
    Tour, compute_bubble_frame,
};

/// Virtual seconds to run between taps; long enough for every transition to settle.
const STEP_SECS: f64 = 2.0;

#[derive(Parser, Debug)]
#[command(name = "coachmarks", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a tour headlessly and print surface operations and observer events as JSON.
    Simulate(SimulateArgs),
    /// Place a single caption bubble and print the placement as JSON.
    Place(PlaceArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input tour JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Font file for caption measurement (fixed-advance metrics otherwise).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Number of taps to deliver (defaults to the number of marks).
    #[arg(long)]
    taps: Option<usize>,
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Screen bounds as `W,H`.
    #[arg(long, value_parser = parse_size)]
    bounds: Size,

    /// Target rect as `X,Y,W,H`.
    #[arg(long, value_parser = parse_rect)]
    rect: Rect,

    #[arg(long)]
    caption: String,

    #[arg(long, value_enum, default_value_t = ArrowArg::Top)]
    arrow: ArrowArg,

    /// Font file for caption measurement (fixed-advance metrics otherwise).
    #[arg(long)]
    font: Option<PathBuf>,

    #[arg(long, default_value_t = 14.0)]
    font_size: f32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ArrowArg {
    Top,
    Bottom,
    Left,
    Right,
}

impl From<ArrowArg> for ArrowPosition {
    fn from(a: ArrowArg) -> Self {
        match a {
            ArrowArg::Top => Self::Top,
            ArrowArg::Bottom => Self::Bottom,
            ArrowArg::Left => Self::Left,
            ArrowArg::Right => Self::Right,
        }
    }
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let values = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    values
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected {N} comma-separated numbers, got {}", v.len()))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let [w, h] = parse_numbers::<2>(s)?;
    Ok(Size::new(w, h))
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x, y, w, h] = parse_numbers::<4>(s)?;
    Ok(Rect::new(x, y, x + w, y + h))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Place(args) => cmd_place(args),
    }
}

fn measurer(font: Option<&PathBuf>) -> anyhow::Result<Box<dyn TextMeasurer>> {
    match font {
        Some(path) => {
            let mut m = ParleyMeasurer::new();
            m.register_font_file(path)
                .with_context(|| format!("load font '{}'", path.display()))?;
            tracing::debug!(families = ?m.families(), "caption fonts ready");
            Ok(Box::new(m))
        }
        None => Ok(Box::new(FixedAdvanceMeasurer::default())),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let tour = Tour::from_path(&args.in_path)?;
    tour.validate()
        .with_context(|| format!("validate tour '{}'", args.in_path.display()))?;
    let catalog = tour.catalog()?;
    let taps = args.taps.unwrap_or(catalog.count());
    tracing::info!(
        marks = catalog.count(),
        captioned = catalog.iter().filter(|m| m.has_caption()).count(),
        "tour loaded"
    );

    let mut controller = OverlayController::new(
        catalog,
        tour.bounds,
        tour.config.clone(),
        RecordingSurface::new(),
        ManualScheduler::new(),
        measurer(args.font.as_ref())?,
    )?;
    let log = EventLog::new();
    controller.set_observer(log.clone());

    controller.start()?;
    controller.run_for(STEP_SECS)?;
    for _ in 0..taps {
        controller.tap()?;
        controller.run_for(STEP_SECS)?;
    }
    tracing::info!(state = ?controller.state(), taps, "simulation finished");

    let out = serde_json::json!({
        "state": controller.state(),
        "events": log.events(),
        "ops": controller.surface().ops(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let mut measurer = measurer(args.font.as_ref())?;
    let style = TextStyle {
        size_px: args.font_size,
        ..TextStyle::default()
    };
    let placement = compute_bubble_frame(
        measurer.as_mut(),
        args.rect,
        &args.caption,
        &style,
        args.arrow.into(),
        args.bounds,
        &BubbleMetrics::default(),
    )
    .context("place bubble")?;
    println!("{}", serde_json::to_string_pretty(&placement)?);
    Ok(())
}
