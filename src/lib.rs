//! Passfoto: biometric passport photo layout.
//!
//! Passfoto takes a portrait photo plus a handful of facial landmarks and
//! lays the photo out on a print sheet so that every copy meets the
//! biometric size rules: the face is rotated level, scaled so the
//! chin-to-head distance hits the ideal range, and positioned so the eyes
//! and nose land where the standard wants them. The sheet is then handed to
//! a renderer as a list of abstract drawing commands.
//!
//! # Modules
//!
//! - [`geo`]: Vectors, affine transforms, boxes and physical units
//! - [`standards`]: Per-category biometric measurement ranges
//! - [`input`]: The landmark document and source image probing
//! - [`face`]: Resolving landmarks into the face frame
//! - [`layout`]: Scale solving, transform composition and grid packing
//! - [`compliance`]: Head size classification and reporting
//! - [`render`]: Draw commands and the ImageMagick backend
//! - [`config`]: Layered configuration
//! - [`error`]: Error types for passfoto operations

pub mod compliance;
pub mod config;
pub mod error;
pub mod face;
pub mod geo;
pub mod input;
pub mod layout;
pub mod render;
pub mod standards;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn, LevelFilter};
use serde::Serialize;

pub use error::PassfotoError;

use compliance::{ComplianceReport, IssueCode};
use config::ConfigFile;
use geo::{Length, Resolution};
use layout::{LayoutConfig, LayoutPlan};
use render::{MagickRenderer, RenderJob, Renderer};

/// The passfoto CLI application.
#[derive(Parser)]
#[command(name = "passfoto")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Render a print sheet of passport photos.
    Sheet(SheetArgs),
    /// Render the landmarks over the source photo for inspection.
    Check(CheckArgs),
    /// Compute the layout and compliance report without rendering.
    Plan(PlanArgs),
}

/// Layout settings shared by the sheet and plan subcommands.
#[derive(clap::Args)]
struct LayoutArgs {
    /// Photo category ('adult' or 'child').
    #[arg(long)]
    category: Option<String>,

    /// Output resolution in pixels per inch.
    #[arg(long)]
    resolution: Option<f64>,

    /// Canvas width, e.g. '150mm', '6in' or '15cm' (bare numbers are mm).
    #[arg(long)]
    canvas_width: Option<String>,

    /// Canvas height.
    #[arg(long)]
    canvas_height: Option<String>,

    /// White border around each photo.
    #[arg(long)]
    border: Option<String>,

    /// Cut-line margin around each bordered photo.
    #[arg(long)]
    line: Option<String>,

    /// YAML config file with defaults for any of the above.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl LayoutArgs {
    fn overrides(&self) -> Result<ConfigFile, PassfotoError> {
        fn length(value: &Option<String>) -> Result<Option<Length>, PassfotoError> {
            value.as_deref().map(str::parse).transpose()
        }

        Ok(ConfigFile {
            category: self.category.as_deref().map(str::parse).transpose()?,
            resolution: self.resolution.map(Resolution::new).transpose()?,
            canvas_width: length(&self.canvas_width)?,
            canvas_height: length(&self.canvas_height)?,
            border: length(&self.border)?,
            line: length(&self.line)?,
        })
    }

    fn layout_config(&self) -> Result<LayoutConfig, PassfotoError> {
        config::load_layout_config(self.config.as_deref(), self.overrides()?)
    }
}

/// How the finished job is rendered.
#[derive(clap::Args)]
struct RenderArgs {
    /// Print the renderer command line instead of running it.
    #[arg(long)]
    dry_run: bool,

    /// ImageMagick program to run.
    #[arg(long, env = "PASSFOTO_MAGICK", default_value = "convert")]
    magick: String,
}

/// Arguments for the sheet subcommand.
#[derive(clap::Args)]
struct SheetArgs {
    /// Landmark JSON file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Draw the measurement overlay on every photo.
    #[arg(long)]
    check: bool,

    #[command(flatten)]
    render: RenderArgs,
}

/// Arguments for the check subcommand.
#[derive(clap::Args)]
struct CheckArgs {
    /// Landmark JSON file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    #[command(flatten)]
    render: RenderArgs,
}

/// Arguments for the plan subcommand.
#[derive(clap::Args)]
struct PlanArgs {
    /// Landmark JSON file.
    input: PathBuf,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Output format for the plan ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Exit non-zero if the report has any error or warning.
    #[arg(long)]
    strict: bool,
}

/// Run the passfoto CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PassfotoError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Sheet(args)) => run_sheet(args),
        Some(Commands::Check(args)) => run_check(args),
        Some(Commands::Plan(args)) => run_plan(args),
        None => {
            println!("passfoto {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Biometric passport photo layout.");
            println!();
            println!("Run 'passfoto --help' for usage information.");
            Ok(())
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, wins over -v
    let _ = env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
}

/// Loads the document, plans the layout and checks it.
fn plan_and_check(
    path: &Path,
    config: &LayoutConfig,
) -> Result<(PathBuf, LayoutPlan, ComplianceReport), PassfotoError> {
    let (document, landmarks) = input::load_landmarks(path)?;
    let drift = face::detect_drift(&landmarks);
    let plan = layout::plan_layout(&landmarks, config)?;
    let report = compliance::check_plan(&plan, drift);
    Ok((document.image.filename, plan, report))
}

fn render_job(args: &RenderArgs, job: &RenderJob, output: &Path) -> Result<(), PassfotoError> {
    let renderer = MagickRenderer::new(args.magick.as_str());
    if args.dry_run {
        println!("{}", renderer.command_line(job, output));
        return Ok(());
    }
    renderer.render(job, output)?;
    info!("Wrote {}", output.display());
    Ok(())
}

/// Execute the sheet subcommand.
fn run_sheet(args: SheetArgs) -> Result<(), PassfotoError> {
    let config = args.layout.layout_config()?;
    let (source, plan, report) = plan_and_check(&args.input, &config)?;

    // drift has already been logged by the resolver
    for issue in report
        .issues
        .iter()
        .filter(|issue| issue.code != IssueCode::DimensionDrift)
    {
        warn!("{}", issue);
    }
    info!(
        "Placing {} image(s) on a {:.1} x {:.1} mm canvas",
        plan.placements.len(),
        config.canvas_mm.x,
        config.canvas_mm.y
    );

    let job = render::sheet_job(&plan, &source, args.check);
    render_job(&args.render, &job, &args.output)
}

/// Execute the check subcommand.
fn run_check(args: CheckArgs) -> Result<(), PassfotoError> {
    let (document, landmarks) = input::load_landmarks(&args.input)?;
    // logs the drift warning, if any
    let _ = face::detect_drift(&landmarks);
    let geometry = face::resolve(&landmarks)?;

    let px = |v: geo::Vector2d| format!("({:.0}, {:.0})", v.x, v.y);
    println!("Left eye:   {}", px(geometry.left_eye));
    println!("Right eye:  {}", px(geometry.right_eye));
    println!("Nose:       {}", px(geometry.nose));
    println!("Top:        {}", px(geometry.top));
    println!("Chin:       {}", px(geometry.chin));
    println!("Rotation:   {:.3} deg", geometry.rotation_degrees());

    let job = render::landmark_check_job(&geometry, &document.image.filename);
    render_job(&args.render, &job, &args.output)
}

/// JSON shape of `plan --output json`.
#[derive(Serialize)]
struct PlanOutput<'a> {
    plan: &'a LayoutPlan,
    report: &'a ComplianceReport,
}

/// Execute the plan subcommand.
fn run_plan(args: PlanArgs) -> Result<(), PassfotoError> {
    let config = args.layout.layout_config()?;
    let (_, plan, report) = plan_and_check(&args.input, &config)?;

    match args.output.as_str() {
        "text" => {
            print!("{}", plan);
            println!();
            print!("{}", report);
        }
        "json" => {
            let out = PlanOutput {
                plan: &plan,
                report: &report,
            };
            let text = serde_json::to_string_pretty(&out).map_err(std::io::Error::from)?;
            println!("{}", text);
        }
        other => {
            return Err(PassfotoError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            )));
        }
    }

    if args.strict && !report.is_clean() {
        Err(PassfotoError::ComplianceFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}
