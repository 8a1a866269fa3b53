//! raster-demo - render the circle and line rasterizers to PNG.
//!
//! ```text
//! raster-demo circle --radius 40 -o circle.png
//! raster-demo --config demo.yaml line --x0 0 --y0 0 --x1 300 --y1 120
//! ```

use anyhow::{Context, Result};
use canvas_raster::prelude::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Render rasterized primitives to a PNG file.
#[derive(Parser, Debug)]
#[command(name = "raster-demo")]
#[command(version)]
#[command(about = "Render midpoint circles and DDA lines to PNG", long_about = None)]
struct Cli {
    /// Config file path (defaults to <config dir>/canvas-raster/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output PNG path (defaults to the configured file name)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Canvas width, overriding the config
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Canvas height, overriding the config
    #[arg(long, global = true)]
    height: Option<u32>,

    #[command(subcommand)]
    shape: Shape,
}

#[derive(Subcommand, Debug)]
enum Shape {
    /// Circle outline (midpoint algorithm)
    Circle {
        /// Center x (defaults to the canvas center)
        #[arg(long, allow_hyphen_values = true)]
        cx: Option<i32>,
        /// Center y (defaults to the canvas center)
        #[arg(long, allow_hyphen_values = true)]
        cy: Option<i32>,
        /// Radius in pixels
        #[arg(short, long, default_value_t = 5)]
        radius: i32,
        /// Outline colour as hex
        #[arg(long, default_value = "#0000ff")]
        color: String,
    },
    /// Line segment (DDA algorithm, left to right)
    Line {
        /// Start x
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        x0: i32,
        /// Start y
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        y0: i32,
        /// End x
        #[arg(long, default_value_t = 110, allow_hyphen_values = true)]
        x1: i32,
        /// End y
        #[arg(long, default_value_t = 109, allow_hyphen_values = true)]
        y1: i32,
        /// Line colour as hex
        #[arg(long, default_value = "#ff0000")]
        color: String,
        /// Walk any octant instead of only left to right
        #[arg(long)]
        any_octant: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(|| {
        dirs::config_dir().map(|p| p.join("canvas-raster/config.yaml"))
    });
    let mut config = match &config_path {
        // An explicit path must load; the default location is optional.
        Some(path) if cli.config.is_some() => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }

    let mut fb = Framebuffer::new(config.canvas.width, config.canvas.height)?;
    fb.clear(config.background()?);

    let pixels = match cli.shape {
        Shape::Circle {
            cx,
            cy,
            radius,
            color,
        } => {
            let center = Point::new(
                cx.unwrap_or((fb.width() / 2) as i32),
                cy.unwrap_or((fb.height() / 2) as i32),
            );
            let circle = Circle::new(center, radius);
            let color = Rgba::from_hex(&color)?;
            let points = rasterize_circle(circle);
            paint_points(&mut fb, points.iter().copied(), color);
            points.len()
        }
        Shape::Line {
            x0,
            y0,
            x1,
            y1,
            color,
            any_octant,
        } => {
            let segment = Segment::from_coords(x0, y0, x1, y1);
            let color = Rgba::from_hex(&color)?;
            let points = if any_octant {
                line_points_any_octant(segment)
            } else {
                rasterize_line(segment)
            };
            paint_points(&mut fb, points.iter().copied(), color);
            points.len()
        }
    };

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.file_name));
    PngEncoder::write_to_file(&fb, &output)
        .with_context(|| format!("writing {}", output.display()))?;

    tracing::info!(pixels, output = %output.display(), "rendered");
    Ok(())
}
