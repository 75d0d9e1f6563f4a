//! Personal site - static web server and picture utilities.
//!
//! This binary starts the HTTP server or runs one of the offline commands.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use personal_site::{
    config::{AnalyzeConfig, Cli, Command, ServeConfig, ThumbnailsConfig},
    inventory::ImageInventory,
    report,
    server::{create_router, RouterConfig, ASSET_MOUNTS, PAGES},
    thumbnail::ThumbnailGenerator,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Serve(config) => run_serve(config).await,
        Command::Thumbnails(config) => run_thumbnails(config),
        Command::Analyze(config) => run_analyze(config),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!("  Site root: {}", config.root.display());
    info!("  Cache max-age: {}s", config.cache_max_age);
    match config.cors_origins {
        Some(ref origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS origins: any"),
    }

    let router = create_router(build_router_config(&config));
    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Pages:");
    for page in PAGES {
        info!("    http://{}{}", addr, page.path);
    }
    info!("  Assets:");
    for mount in ASSET_MOUNTS {
        info!("    http://{}{}/<file>", addr, mount.prefix);
    }
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "personal_site=debug,tower_http=debug"
    } else {
        "personal_site=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build RouterConfig from the application ServeConfig.
fn build_router_config(config: &ServeConfig) -> RouterConfig {
    let mut router_config = RouterConfig::new(&config.root)
        .with_cache_max_age(config.cache_max_age)
        .with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}

// =============================================================================
// Thumbnails Command
// =============================================================================

fn run_thumbnails(config: ThumbnailsConfig) -> ExitCode {
    // Per-file results are printed below; logging only adds search details.
    if config.verbose {
        init_logging(true);
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let generator = ThumbnailGenerator::new(&config.source, &config.output)
        .with_scale(config.scale_factor())
        .with_settings(config.compression_settings());

    let count = match ImageInventory::new(&config.source).scan() {
        Ok(files) => files.len(),
        Err(e) => {
            println!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for line in report::batch_header(
        count,
        generator.source_dir(),
        generator.scale(),
        generator.settings(),
    ) {
        println!("{}", line);
    }
    println!();

    let summary = match generator.generate_all() {
        Ok(summary) => summary,
        Err(e) => {
            println!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for entry in &summary.entries {
        match &entry.result {
            Ok(thumbnail) => println!("{}", report::thumbnail_line(thumbnail)),
            Err(e) => println!("{}", report::failure_line(&entry.name, e)),
        }
    }

    println!();
    for line in report::batch_summary(&summary, generator.output_dir()) {
        println!("{}", line);
    }

    ExitCode::SUCCESS
}

// =============================================================================
// Analyze Command
// =============================================================================

fn run_analyze(config: AnalyzeConfig) -> ExitCode {
    if config.verbose {
        init_logging(true);
    }

    let inventory = ImageInventory::new(&config.dir);

    let entries = match inventory.entries() {
        Ok(entries) => entries,
        Err(e) => {
            println!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}:", report::found_images(entries.len(), inventory.dir()));
    println!();

    for entry in entries {
        println!("{}", report::inventory_line(&entry));
    }

    ExitCode::SUCCESS
}
