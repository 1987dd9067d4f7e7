//! Annograde: annotation reconciliation and grading engine.
//!
//! Annograde compares a trainee's freehand geometric annotations on an
//! image against a reference (ground-truth) set and decides (a) whether
//! the two sets are equivalent within a numeric tolerance and (b) which
//! individual shapes are correct, incorrect, or missing. The three-way
//! partition drives color-coded training feedback (green/red/yellow
//! overlays) in annotation sandboxes.
//!
//! The engine is a deterministic, synchronous, pure computation over
//! in-memory geometric data: no rendering, no persistence, no network
//! I/O. The CLI wrapped around it reads annotation sets from JSON files
//! and prints verdicts and reports.
//!
//! # Modules
//!
//! - [`shape`]: shape model (regions, curves, segmented paths) and JSON I/O
//! - [`reconcile`]: the two grading operations (`match_shapes`, `reconcile`)
//! - [`matcher`]: greedy one-to-one bipartite matching
//! - [`similarity`]: per-family similarity predicates
//! - [`threshold`]: tolerance-to-distance derivation
//! - [`geom`]: Bézier sampling and arc-length resampling
//! - [`validation`]: annotation set validation and error reporting
//! - [`error`]: error types for annograde operations

pub mod error;
pub mod geom;
pub mod matcher;
pub mod reconcile;
pub mod shape;
pub mod similarity;
pub mod threshold;
pub mod validation;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::AnnogradeError;

use reconcile::ReconcileOptions;
use shape::{AnnotationSet, ShapeFamily};

/// The annograde CLI application.
#[derive(Parser)]
#[command(name = "annograde")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check whether a submission exactly matches a reference set.
    Match(MatchArgs),

    /// Partition a submission into correct, incorrect and missing shapes.
    Reconcile(ReconcileArgs),

    /// Validate an annotation set for errors and warnings.
    Validate(ValidateArgs),
}

/// Arguments for the match subcommand.
#[derive(clap::Args)]
struct MatchArgs {
    /// Submitted annotation set (JSON).
    user: PathBuf,

    /// Reference annotation set (JSON). Its image dimensions drive the
    /// threshold derivation.
    reference: PathBuf,

    /// Shape family to grade ('region', 'curve', or 'segmented').
    #[arg(long, default_value = "region")]
    family: String,

    /// Variation tolerance percentage (per-family default when omitted).
    #[arg(long)]
    tolerance: Option<u32>,
}

/// Arguments for the reconcile subcommand.
#[derive(clap::Args)]
struct ReconcileArgs {
    /// Submitted annotation set (JSON).
    user: PathBuf,

    /// Reference annotation set (JSON). Its image dimensions drive the
    /// threshold derivation.
    reference: PathBuf,

    /// Shape family to grade ('region', 'curve', or 'segmented').
    #[arg(long, default_value = "region")]
    family: String,

    /// Variation tolerance percentage (per-family default when omitted).
    #[arg(long)]
    tolerance: Option<u32>,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Exit non-zero unless every shape is correct and none are missing.
    #[arg(long)]
    strict: bool,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Annotation set to validate (JSON).
    input: PathBuf,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the annograde CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), AnnogradeError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Match(args)) => run_match(args),
        Some(Commands::Reconcile(args)) => run_reconcile(args),
        Some(Commands::Validate(args)) => run_validate(args),
        None => {
            // No subcommand: just print help hint and exit successfully
            println!("annograde {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Annotation reconciliation and grading engine.");
            println!();
            println!("Run 'annograde --help' for usage information.");
            Ok(())
        }
    }
}

/// Parses a shape family name as used on the command line.
fn parse_family(name: &str) -> Result<ShapeFamily, AnnogradeError> {
    match name {
        "region" | "path" => Ok(ShapeFamily::Region),
        "curve" | "lane" => Ok(ShapeFamily::Curve),
        "segmented" => Ok(ShapeFamily::Segmented),
        other => Err(AnnogradeError::UnsupportedFamily(format!(
            "'{}' (supported: region, curve, segmented)",
            other
        ))),
    }
}

/// Builds reconciliation options from a reference set and a CLI tolerance.
fn options_for(reference: &AnnotationSet, tolerance: Option<u32>) -> ReconcileOptions {
    ReconcileOptions {
        image_width: reference.image_width,
        image_height: reference.image_height,
        tolerance_percent: tolerance,
    }
}

/// Execute the match subcommand.
fn run_match(args: MatchArgs) -> Result<(), AnnogradeError> {
    let family = parse_family(&args.family)?;
    let user = shape::io_json::read_set_json(&args.user)?;
    let reference = shape::io_json::read_set_json(&args.reference)?;

    let opts = options_for(&reference, args.tolerance);
    if reconcile::match_shapes(family, &user.shapes, &reference.shapes, &opts) {
        println!("Annotation sets match within tolerance");
        Ok(())
    } else {
        Err(AnnogradeError::MatchFailed)
    }
}

/// Execute the reconcile subcommand.
fn run_reconcile(args: ReconcileArgs) -> Result<(), AnnogradeError> {
    let family = parse_family(&args.family)?;
    let user = shape::io_json::read_set_json(&args.user)?;
    let reference = shape::io_json::read_set_json(&args.reference)?;

    let opts = options_for(&reference, args.tolerance);
    let result = reconcile::reconcile(family, &user.shapes, &reference.shapes, &opts);

    match args.output.as_str() {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("report serialization cannot fail")
        ),
        _ => print!("{}", result),
    }

    if args.strict && !result.is_perfect() {
        Err(AnnogradeError::ReconcileFailed {
            correct: result.correct_count(),
            incorrect: result.incorrect_count(),
            missing: result.missing_count(),
        })
    } else {
        Ok(())
    }
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), AnnogradeError> {
    let set = shape::io_json::read_set_json(&args.input)?;

    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_set(&set, &opts);

    match args.output.as_str() {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serialization cannot fail")
        ),
        _ => print!("{}", report),
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(AnnogradeError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}
