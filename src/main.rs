//! vscroll - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vscroll::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ResolvedConfig,
};
use vscroll::model::dataset::MAX_ITEM_COUNT;
use vscroll::model::AppError;
use vscroll::source::load_records;
use vscroll::state::{AppState, Tab};
use vscroll::view::{run_app, ColorConfig, Palette};

/// vscroll - scroll through very large lists in the terminal
#[derive(Parser, Debug)]
#[command(name = "vscroll")]
#[command(version)]
#[command(about = "Virtualized list demo: only the rows on screen are rendered")]
pub struct Args {
    /// Number of generated records per tab
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_ITEM_COUNT as i64))]
    pub count: Option<u32>,

    /// Items rendered beyond each edge of the viewport (negative means 0)
    #[arg(long, allow_negative_numbers = true)]
    pub overscan: Option<i64>,

    /// Tab shown on startup
    #[arg(long, value_enum, requires_if("records", "items"))]
    pub tab: Option<Tab>,

    /// JSONL file of records for the records tab
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    vscroll::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let records = match &args.items {
        Some(path) => Some(load_records(path)?.records),
        None => None,
    };

    let app_state = AppState::new(&config, records)?;
    let palette = Palette::new(ColorConfig::from_env_and_args(args.no_color));

    run_app(app_state, palette)?;

    Ok(())
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, ConfigError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);

    Ok(apply_cli_overrides(
        with_env,
        args.count.map(|count| count as usize),
        args.overscan,
        args.tab,
    ))
}
