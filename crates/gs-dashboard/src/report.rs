//! Builds the JSON report the binary prints.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

use gs_feed_model::FeedResult;
use gs_feed_store::{Catalog, FeedSnapshot, views};

use crate::config::{DashboardConfig, ViewMode};

/// Load the configured catalog (or the built-in one) and freeze it.
pub fn load_snapshot(config: &DashboardConfig, now: DateTime<Utc>) -> FeedResult<FeedSnapshot> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog file");
            Catalog::from_file(path)?
        }
        None => {
            tracing::info!("using built-in Pune catalog");
            Catalog::pune(now)
        }
    };
    Ok(catalog.snapshot(now))
}

/// Render the views selected by `config.view`.
pub fn render(
    snapshot: &FeedSnapshot,
    config: &DashboardConfig,
    now: DateTime<Utc>,
) -> serde_json::Result<Value> {
    let mut out = Map::new();
    out.insert("captured_at".into(), json!(snapshot.captured_at));

    if matches!(config.view, ViewMode::Operator | ViewMode::Both) {
        let view = views::operator_view(
            snapshot,
            now,
            config.congestion_warning_pct,
            config.aqi_alert_level,
        );
        tracing::debug!(
            active_alerts = view.active_alert_count,
            critical = view.critical_count,
            responses = view.active_response_count,
            "operator view built"
        );
        out.insert("operator".into(), serde_json::to_value(&view)?);
    }
    if matches!(config.view, ViewMode::Public | ViewMode::Both) {
        let view = views::public_view(snapshot, config.top_congested, now);
        tracing::debug!(alerts = view.alert_count, "public view built");
        out.insert("public".into(), serde_json::to_value(&view)?);
    }

    Ok(Value::Object(out))
}
