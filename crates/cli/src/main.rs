use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jigsaw::grid::{Grid, GridDims, ReplayToken};
use jigsaw::render::{PuzzleView, Rect};
use jigsaw::svg::SvgSurface;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod config;
mod provenance;

use config::RunConfig;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "jigsaw")]
#[command(about = "Generate and render grids of interlocking jigsaw pieces")]
struct Cmd {
    /// Optional JSON config with `grid`, `render` and `style` sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

/// Grid size and replay token; sizes fall back to the config file.
#[derive(Args, Clone, Copy)]
struct GridArgs {
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    cols: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
}

impl GridArgs {
    fn dims(&self, base: GridDims) -> Result<GridDims> {
        let dims = GridDims::new(self.rows.unwrap_or(base.rows), self.cols.unwrap_or(base.cols));
        dims.validate().context("invalid grid size")?;
        Ok(dims)
    }

    fn token(&self) -> ReplayToken {
        ReplayToken {
            seed: self.seed,
            index: self.index,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Render a grid to an SVG file and write a provenance sidecar next to it
    Render {
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long)]
        out: PathBuf,
        /// Override the piece edge length from the config
        #[arg(long)]
        piece_width: Option<f64>,
        /// Keep the first generated grid across redraws
        #[arg(long)]
        cache: bool,
    },
    /// Print the generated pieces as JSON (null marks a border edge)
    Grid {
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long)]
        pretty: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = RunConfig::load_or_default(cmd.config.as_deref())?;
    match cmd.action {
        Action::Render {
            grid,
            out,
            piece_width,
            cache,
        } => render(cfg, grid, &out, piece_width, cache),
        Action::Grid { grid, pretty } => print_grid(&cfg, grid, pretty),
        Action::Report => report(),
    }
}

fn render(
    cfg: RunConfig,
    args: GridArgs,
    out: &Path,
    piece_width: Option<f64>,
    cache: bool,
) -> Result<()> {
    let dims = args.dims(cfg.grid)?;
    let mut render_cfg = cfg.render;
    if let Some(w) = piece_width {
        render_cfg.piece_width = w;
    }
    render_cfg.validate().context("invalid render settings")?;
    tracing::info!(
        rows = dims.rows,
        cols = dims.cols,
        seed = args.seed,
        index = args.index,
        cache,
        out = %out.display(),
        "render"
    );

    let (width, height) = render_cfg.canvas_size(dims);
    let mut surface = SvgSurface::new(width, height, cfg.style.clone());
    let mut view = PuzzleView::seeded(dims, render_cfg, args.token()).with_cache(cache);
    view.draw(&mut surface, Rect::new(0.0, 0.0, width, height));
    let pieces = surface.path_count();
    let doc = surface.finish();

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, doc).with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(
        "render",
        json!({
            "grid": dims,
            "replay": args.token(),
            "render": render_cfg,
            "style": cfg.style,
            "cache": cache,
        }),
    );
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(pieces, sidecar = %sidecar.display(), "wrote svg");
    Ok(())
}

fn print_grid(cfg: &RunConfig, args: GridArgs, pretty: bool) -> Result<()> {
    let dims = args.dims(cfg.grid)?;
    tracing::info!(rows = dims.rows, cols = dims.cols, seed = args.seed, index = args.index, "grid");
    let grid = Grid::replay(dims, args.token());
    let text = if pretty {
        serde_json::to_string_pretty(&grid)?
    } else {
        serde_json::to_string(&grid)?
    };
    println!("{text}");
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::document(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
