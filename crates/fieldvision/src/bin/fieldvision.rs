//! fieldvision CLI: robot pose from tag detections and color-blob detection
//! on still images.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use fieldvision::detect::detect_region_in_file;
use fieldvision::localization::{FieldLayout, MarkerDetection};
use fieldvision::region::ProcessorParams;
use fieldvision::{CameraOffset, ColorRange, Error, Pose2d, PoseEstimator};
use log::{info, LevelFilter};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing_log::LogTracer;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[derive(Parser)]
#[command(name = "fieldvision")]
#[command(about = "Field localization from fiducial markers and color-blob detection")]
#[command(version)]
struct Cli {
    /// Log level for the stderr logger (ignored with the `tracing` feature,
    /// which reads `RUST_LOG`).
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// Emit tracing events as JSON lines (feature `tracing` only).
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the robot pose for every detection in a JSON config.
    Pose {
        /// Config with `camera_offset`, `layout` and `detections`.
        #[arg(long)]
        config: PathBuf,
    },
    /// Find the largest blob of a color in an image.
    Detect {
        /// Path to the input image.
        #[arg(long)]
        image: PathBuf,

        #[arg(long, value_enum, default_value_t = Color::Red)]
        color: Color,

        /// Processor parameters (JSON). Its color ranges, when non-empty,
        /// replace `--color`.
        #[arg(long)]
        params: Option<PathBuf>,

        /// Write the detection here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Color {
    Red,
    Blue,
    White,
}

impl Color {
    fn ranges(self) -> Vec<ColorRange> {
        match self {
            Color::Red => ColorRange::red(),
            Color::Blue => ColorRange::blue(),
            Color::White => ColorRange::white(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PoseConfig {
    #[serde(default)]
    camera_offset: CameraOffset,
    /// Catalog used for detections that arrive without metadata.
    #[serde(default)]
    layout: FieldLayout,
    detections: Vec<MarkerDetection>,
}

#[derive(Debug, Serialize)]
struct PoseReport {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pose: Option<Pose2d>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_json);

    match cli.command {
        Commands::Pose { config } => run_pose(&config),
        Commands::Detect {
            image,
            color,
            params,
            out,
        } => run_detect(&image, color, params.as_deref(), out.as_deref()),
    }
}

fn init_logging(level: LevelFilter, json: bool) {
    #[cfg(feature = "tracing")]
    {
        let _ = level;
        let _ = LogTracer::init();
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr);
        if json {
            let _ = builder.json().flatten_event(true).try_init();
        } else {
            let _ = builder.try_init();
        }
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = json;
        let _ = fieldvision::init_with_level(level);
    }
}

fn read_to_string(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

fn run_pose(config_path: &Path) -> Result<(), Error> {
    let config: PoseConfig = serde_json::from_str(&read_to_string(config_path)?)?;
    info!(
        "{} detection(s), {} tag(s) in layout",
        config.detections.len(),
        config.layout.len()
    );

    let estimator = PoseEstimator::new(config.camera_offset);
    let reports: Vec<PoseReport> = config
        .detections
        .iter()
        .map(|det| {
            let result = match (&det.metadata, &det.camera_pose) {
                (None, Some(pose)) => estimator.estimate_with_catalog(&config.layout, det.id, pose),
                _ => estimator.estimate_detection(Some(det)),
            };
            match result {
                Ok(pose) => PoseReport {
                    id: det.id,
                    pose: Some(pose),
                    error: None,
                },
                Err(e) => PoseReport {
                    id: det.id,
                    pose: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn run_detect(
    image_path: &Path,
    color: Color,
    params_path: Option<&Path>,
    out_path: Option<&Path>,
) -> Result<(), Error> {
    let mut params = match params_path {
        Some(p) => serde_json::from_str::<ProcessorParams>(&read_to_string(p)?)?,
        None => ProcessorParams::default(),
    };
    if params.color_ranges.is_empty() {
        params.color_ranges = color.ranges();
    }

    info!("detecting {:?} in {}", color, image_path.display());
    let detection = detect_region_in_file(image_path, params)?;
    let json = serde_json::to_string_pretty(&detection)?;

    match out_path {
        Some(out) => {
            fs::write(out, json).map_err(|source| Error::Io {
                path: out.display().to_string(),
                source,
            })?;
            info!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
