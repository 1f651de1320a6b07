use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::level_filters::LevelFilter;

use deeplink_router::config::{load_config, ObservabilityConfig, RouterConfig};
use deeplink_router::config::validation::{find_overlaps, find_shared_roots};
use deeplink_router::manifest::registry_from_config;
use deeplink_router::observability::init_logging;

#[derive(Parser)]
#[command(name = "routectl")]
#[command(about = "Check route manifests and resolve deep links against them", long_about = None)]
struct Cli {
    /// Route manifest (TOML)
    #[arg(short, long, default_value = "routes.toml")]
    manifest: PathBuf,

    /// Override the manifest's log level
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the manifest and report routes that can collide
    Check,
    /// Resolve a deep link and print the screen it opens
    Resolve {
        /// Concrete route, e.g. app://folder/42
        url: String,
    },
    /// List declared route patterns
    Routes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli.manifest) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            tracing::error!(path = ?cli.manifest, error = %e, "Failed to load route manifest");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut observability = config.observability.clone();
    if let Some(level) = cli.log_level {
        if let Err(e) = level.parse::<LevelFilter>() {
            eprintln!("Error: invalid log level `{}`: {}", level, e);
            return ExitCode::FAILURE;
        }
        observability.log_level = level;
    }
    init_logging(&observability);

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Commands,
    config: &RouterConfig,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Check => {
            let overlaps = find_overlaps(config);
            for overlap in &overlaps {
                tracing::warn!(
                    first = %overlap.first,
                    second = %overlap.second,
                    example = %overlap.example,
                    "Overlapping routes"
                );
                println!("warning: {}", overlap);
            }
            for root in find_shared_roots(config) {
                println!("note: {}", root);
            }
            println!(
                "{} routes OK, {} overlapping pair(s)",
                config.routes.len(),
                overlaps.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve { url } => {
            let registry = registry_from_config(config);
            match registry.screen_for(&url) {
                Ok(screen) => {
                    println!("{}", serde_json::to_string_pretty(&screen)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(reason) => {
                    let body = json!({ "url": url, "unresolved": reason.to_string() });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Routes => {
            for route in &config.routes {
                println!("{:<24} {:<40} {}", route.name, route.pattern, route.screen);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
