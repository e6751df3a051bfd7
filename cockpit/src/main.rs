mod cli;

use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use common::logger::{TraceId, init_logger, root_span};
use tracing::Instrument;

use cockpit::{
    config::AppConfig,
    trigger::{GithubWorkflowTrigger, request_refresh},
    watch::Watcher,
};

use cli::{Cli, Command};

async fn run_once(cfg: &AppConfig, json: bool) -> anyhow::Result<()> {
    let mut watcher = Watcher::new(cfg);
    let outcome = watcher
        .tick(Utc::now())
        .await
        .context("refresh failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    print!("{}", outcome.dashboard);
    println!();
    if outcome.radar.is_empty() {
        println!("Catalyst radar: no upcoming events");
    } else {
        println!("Catalyst radar (+4 weeks):");
        for line in &outcome.radar {
            println!("  {line}");
        }
    }

    Ok(())
}

async fn run_trigger(cfg: &AppConfig) -> anyhow::Result<()> {
    let trigger = GithubWorkflowTrigger::from_config(&cfg.trigger)?;

    let trace_id = TraceId::default();
    let receipt = request_refresh(&trigger)
        .instrument(root_span("trigger", &trace_id))
        .await?;

    println!("{}", receipt.message);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let is_production = std::env::var("APP_ENV").unwrap_or_default() == "production";
    init_logger("cockpit", is_production);

    let cfg = AppConfig::from_env();

    match cli.command() {
        Command::Watch { interval_secs } => {
            let every = interval_secs
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(cfg.refresh_interval);

            let watcher = Watcher::new(&cfg);
            tokio::select! {
                _ = watcher.run(every) => {}
                res = tokio::signal::ctrl_c() => {
                    res?;
                    tracing::info!("Shutdown signal received");
                }
            }
        }
        Command::Once { json } => run_once(&cfg, json).await?,
        Command::Trigger => run_trigger(&cfg).await?,
    }

    Ok(())
}
