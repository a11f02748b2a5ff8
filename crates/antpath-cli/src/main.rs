//! Antpath Binary
//!
//! Loads a weight matrix and score tables, runs the colony, reports the best path

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use antpath_cli::{AntpathConfig, JsonFileProvider, RunReport};
use antpath_common::VERSION;
use antpath_engine::load_runner;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Antpath v{}", VERSION);

    // Load configuration
    let config = AntpathConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let run_id = Uuid::now_v7();
    let started_at = Utc::now();
    let provider = JsonFileProvider::new(&config.data_path);
    let mut runner = load_runner(config.colony.clone(), &provider, &provider)
        .await
        .with_context(|| format!("loading {}", config.data_path.display()))?;

    info!(
        run_id = %run_id,
        points = runner.weights().dimension(),
        generations = config.colony.generations,
        population = config.colony.population,
        "Colony ready"
    );

    // The generation loop is CPU-bound
    let outcome = tokio::task::spawn_blocking(move || runner.run()).await??;

    let report = RunReport::new(run_id, started_at, config.colony.clone(), outcome);
    info!(
        run_id = %report.run_id,
        best_length = report.best_length,
        elapsed_ms = report.elapsed_ms(),
        "Best path: {}",
        report.path_display()
    );

    let json = serde_json::to_string_pretty(&report)?;
    match &config.output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("writing report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
