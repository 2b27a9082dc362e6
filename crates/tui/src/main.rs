mod renderer;
mod view;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow, bail};
use campus_core::CarouselConfig;
use campus_core::catalog;
use campus_core::config::presets;
use campus_protocol::TransitionMode;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::renderer::Card;

#[derive(Parser, Debug)]
#[command(name = "campus", about = "Drive a campus carousel in the terminal")]
struct Args {
    /// Page preset to mount: courses, testimonials or blog.
    #[arg(long, default_value = "courses")]
    preset: String,
    /// JSON carousel config; overrides --preset.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Course catalog JSON whose titles become the panels.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Cross-fade instead of sliding.
    #[arg(long)]
    fade: bool,
    /// Stop at the first and last panel.
    #[arg(long)]
    no_wrap: bool,
    #[arg(long)]
    no_autoplay: bool,
    /// Number of placeholder panels when no catalog is given.
    #[arg(long, default_value_t = 6)]
    panels: usize,
    /// Host units per terminal column, used for drag distances and
    /// breakpoints.
    #[arg(long, default_value_t = 8.0)]
    column_width: f64,
    /// Write logs to this file (filtered by RUST_LOG).
    #[arg(long)]
    log: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,campus_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(args: &Args) -> Result<CarouselConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            CarouselConfig::from_json(&data)?
        }
        None => presets::by_name(&args.preset)
            .ok_or_else(|| anyhow!("unknown preset '{}'", args.preset))?,
    };
    if args.fade {
        config.transition = TransitionMode::Fade;
    }
    if args.no_wrap {
        config.wrap_around = false;
    }
    if args.no_autoplay {
        config.autoplay = false;
    }
    Ok(config)
}

fn load_cards(args: &Args) -> Result<Vec<Card>> {
    let Some(path) = &args.catalog else {
        return Ok((1..=args.panels)
            .map(|n| Card {
                title: format!("Panel {n}"),
                body: format!("Placeholder content for panel {n}."),
            })
            .collect());
    };
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let courses = catalog::load_courses(&data)?;
    Ok(courses
        .into_iter()
        .map(|course| Card {
            body: format!(
                "{}\n{} | {}h | ${}",
                course.instructor,
                catalog::category_label(&course.category),
                course.duration,
                course.price
            ),
            title: course.title,
        })
        .collect())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        init_tracing(path)?;
    }

    let config = load_config(&args)?;
    let cards = load_cards(&args)?;
    if cards.is_empty() {
        bail!("nothing to show: no panels");
    }
    if args.column_width <= 0.0 {
        bail!("--column-width must be positive");
    }

    renderer::run(cards, config, args.column_width)
}
