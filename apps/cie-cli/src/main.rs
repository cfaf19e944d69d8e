mod shell;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use cie_app::{AppResult, Session, SessionConfig, load_config};
use cie_diagram::{DiagramKind, format_coordinate, project};

#[derive(Parser)]
#[command(name = "cie-cli")]
#[command(about = "CIE Visual CLI - plot named chromaticity points on CIE diagrams", long_about = None)]
struct Cli {
    /// Session config YAML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in diagrams and their calibrations
    Diagrams,
    /// Project one coordinate pair to pixel space
    Project {
        /// Horizontal coordinate (u' or x)
        #[arg(allow_negative_numbers = true)]
        horiz: f64,
        /// Vertical coordinate (v' or y)
        #[arg(allow_negative_numbers = true)]
        vert: f64,
        /// Diagram to project onto (1976uv or 1931xy)
        #[arg(short, long)]
        diagram: Option<DiagramKind>,
    },
    /// Validate a points JSON file
    Check {
        /// Path to the points JSON file
        path: PathBuf,
        #[arg(short, long)]
        diagram: Option<DiagramKind>,
    },
    /// Import a points JSON file and print where each marker lands
    Plot {
        /// Path to the points JSON file
        path: PathBuf,
        #[arg(short, long)]
        diagram: Option<DiagramKind>,
    },
    /// Start an interactive session on stdin
    Shell {
        #[arg(short, long)]
        diagram: Option<DiagramKind>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SessionConfig::default(),
    };
    tracing::debug!(?config, "session config");

    match cli.command {
        Commands::Diagrams => cmd_diagrams(),
        Commands::Project {
            horiz,
            vert,
            diagram,
        } => cmd_project(session(config, diagram), horiz, vert),
        Commands::Check { path, diagram } => cmd_check(session(config, diagram), &path),
        Commands::Plot { path, diagram } => cmd_plot(session(config, diagram), &path),
        Commands::Shell { diagram } => shell::run(session(config, diagram)),
    }
}

fn session(config: SessionConfig, diagram: Option<DiagramKind>) -> Session {
    let mut session = Session::new(config);
    if let Some(kind) = diagram {
        session.set_diagram(kind);
    }
    session
}

fn cmd_diagrams() -> AppResult<()> {
    for kind in DiagramKind::ALL {
        let spec = kind.spec();
        let c = &spec.calibration;
        println!("{} - CIE {}", kind, spec.title_suffix);
        println!(
            "  {} in [{}, {}], {} in [{}, {}]",
            spec.labels.horiz,
            c.axis_horiz_min,
            c.axis_horiz_max,
            spec.labels.vert,
            c.axis_vert_min,
            c.axis_vert_max
        );
        println!(
            "  origin ({}, {}) px, span {} x {} px on {} ({}x{})",
            c.origin_x_px,
            c.origin_y_px,
            c.width_px,
            c.height_px,
            spec.image_path,
            spec.image_width_px,
            spec.image_height_px
        );
        println!(
            "  JSON fields: name, {}, {}",
            spec.json_fields.horiz, spec.json_fields.vert
        );
    }
    Ok(())
}

fn cmd_project(session: Session, horiz: f64, vert: f64) -> AppResult<()> {
    let horiz = cie_core::ensure_finite(horiz, "horizontal coordinate")?;
    let vert = cie_core::ensure_finite(vert, "vertical coordinate")?;
    let spec = session.spec();
    let pixel = project(horiz, vert, &spec.calibration);
    let marker = session.marker_layout().place(pixel);
    println!(
        "{}: {}, {}: {} on {}",
        spec.labels.horiz,
        format_coordinate(horiz),
        spec.labels.vert,
        format_coordinate(vert),
        session.diagram()
    );
    println!("  pixel:  ({:.2}, {:.2})", pixel.x, pixel.y);
    println!("  marker: ({:.2}, {:.2})", marker.x, marker.y);
    Ok(())
}

fn cmd_check(mut session: Session, path: &Path) -> AppResult<()> {
    println!("Checking points file: {}", path.display());
    session.import_from_file(path)?;
    println!(
        "✓ {} points valid for {}",
        session.store().len(),
        session.diagram()
    );
    Ok(())
}

fn cmd_plot(mut session: Session, path: &Path) -> AppResult<()> {
    session.import_from_file(path)?;
    shell::print_plot(&session);
    Ok(())
}
