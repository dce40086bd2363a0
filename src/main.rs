use std::fs;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use feeder::cli::{Cli, Commands, ViewArgs};
use feeder::config::Config;
use feeder::errors::FeederResult;
use feeder::render;
use feeder::services::{refresh_cycle, FetchService, FilterController, RefreshLoop};
use feeder::sources::{FeedApi, Rss2JsonClient, SourceRegistry};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> FeederResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize source registry
    let source_registry = SourceRegistry::new();

    match cli.command {
        Commands::Sources => cmd_sources(&source_registry),
        Commands::Run { view } => cmd_run(&config, source_registry, &view),
        Commands::Watch {
            view,
            interval,
            cycles,
        } => cmd_watch(&config, source_registry, &view, interval, cycles),
    }
}

fn cmd_sources(source_registry: &SourceRegistry) -> FeederResult<()> {
    if source_registry.is_empty() {
        println!("No sources registered.");
        return Ok(());
    }

    println!("Registered sources:\n");
    for (index, source) in source_registry.sources().iter().enumerate() {
        println!("  {}. {} [{}]", index, source.name, source.color);
        println!("     {}", source.url);
    }

    Ok(())
}

fn build_fetch_service(
    config: &Config,
    source_registry: SourceRegistry,
) -> FetchService<Rss2JsonClient> {
    let api = Rss2JsonClient::new(config.api_url.clone(), config.request_timeout);
    FetchService::new(api, source_registry)
}

fn cmd_run(config: &Config, source_registry: SourceRegistry, view: &ViewArgs) -> FeederResult<()> {
    let filter = source_registry.check_filter(view.filter)?;
    let fetch_service = build_fetch_service(config, source_registry);
    let mut controller = FilterController::new(filter);

    refresh_cycle(&fetch_service, &mut controller);
    emit(config, &fetch_service, &controller, view)
}

fn cmd_watch(
    config: &Config,
    source_registry: SourceRegistry,
    view: &ViewArgs,
    interval: Option<u64>,
    cycles: Option<usize>,
) -> FeederResult<()> {
    let filter = source_registry.check_filter(view.filter)?;
    let interval = interval
        .map(Duration::from_secs)
        .unwrap_or(config.refresh_interval);
    let refresh_loop = RefreshLoop::new(interval)?.with_max_cycles(cycles);

    let fetch_service = build_fetch_service(config, source_registry);
    let mut controller = FilterController::new(filter);

    tracing::info!(interval_secs = interval.as_secs(), "watching feeds");

    let completed = refresh_loop.run(|_| {
        refresh_cycle(&fetch_service, &mut controller);
        emit(config, &fetch_service, &controller, view)
    })?;

    tracing::info!(cycles = completed, "watch finished");
    Ok(())
}

/// Render the current view and write it to the output file or stdout
fn emit<A: FeedApi>(
    config: &Config,
    fetch_service: &FetchService<A>,
    controller: &FilterController,
    view: &ViewArgs,
) -> FeederResult<()> {
    let rendered = render::render(view.format, fetch_service.registry(), controller, Utc::now());

    match view.output.as_ref().or(config.output_path.as_ref()) {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!(
                "Wrote {} articles ({} shown) to {}",
                controller.items().len(),
                controller.visible().len(),
                path
            );
        }
        None => {
            print!("{}", rendered);
        }
    }

    Ok(())
}
