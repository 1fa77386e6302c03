//! GatiSutra dashboard feed: prints the operator and public views as JSON.

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use gs_dashboard::config::DashboardConfig;
use gs_dashboard::report;

fn main() -> anyhow::Result<()> {
    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "gs-dashboard starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = DashboardConfig::from_file(&path)?;
            tracing::info!(path = %path, view = ?config.view, "config loaded");
            config
        }
        None => {
            tracing::info!("no config path given, using defaults");
            DashboardConfig::default()
        }
    };

    // ── Build snapshot ──────────────────────────────────────────
    let now = Utc::now();
    let snapshot = report::load_snapshot(&config, now)?;
    tracing::info!(
        junctions = snapshot.junctions.len(),
        alerts = snapshot.alerts.len(),
        vehicles = snapshot.fleet.len(),
        aqi = snapshot.aqi.current,
        "snapshot ready"
    );

    // ── Render ──────────────────────────────────────────────────
    let output = report::render(&snapshot, &config, now)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
