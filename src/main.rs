use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use quizshelf::catalog::{CatalogSource, FilterCategory, StaticCatalog};
use quizshelf::config::{Config, ThemeMode};
use quizshelf::logging::init_tracing;
use quizshelf::ui::{self, App, AppOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "quizshelf", version, about = "Browse the quiz catalog in your terminal")]
struct Cli {
    /// Config file to use instead of ~/.config/quizshelf/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog file to load instead of the configured one
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Filter selected at startup: all, free, paid or purchased
    #[arg(long, value_name = "FILTER")]
    filter: Option<FilterCategory>,

    /// Colour scheme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Simulated catalog latency in milliseconds
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Print the filtered catalog and exit without starting the UI
    #[arg(long)]
    list: bool,
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
    }
    if let Some(filter) = cli.filter {
        config.ui.initial_filter = filter;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme = theme.into();
    }
    if let Some(latency_ms) = cli.latency_ms {
        config.catalog.latency_ms = latency_ms;
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

fn print_catalog(catalog: &StaticCatalog, filter: FilterCategory) -> Result<()> {
    let items = catalog.fetch(filter)?;
    let mut stdout = io::stdout().lock();
    for item in &items {
        writeln!(stdout, "{:>4}  {:<7}  {}", item.id.0, item.badge(), item.title)?;
    }
    if items.is_empty() {
        writeln!(stdout, "No quizzes found")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let catalog = StaticCatalog::open(config.catalog.path.as_deref())?;

    if cli.list {
        return print_catalog(&catalog, config.ui.initial_filter);
    }

    init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(
        quizzes = catalog.len(),
        filter = %config.ui.initial_filter,
        latency_ms = config.catalog.latency_ms,
        "starting catalog screen"
    );

    let app = App::new(
        Box::new(catalog),
        AppOptions::from(&config),
        Instant::now(),
    );
    ui::run(app, config.ui.tick_rate()).context("Terminal UI failed")?;
    Ok(())
}
