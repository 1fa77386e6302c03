//! E2E tests for loading catalogs and configs from disk and rendering reports.

mod helpers;

use gs_dashboard::config::{DashboardConfig, ViewMode};
use gs_dashboard::report;
use gs_feed_model::FeedError;
use gs_feed_store::Catalog;
use helpers::FeedHarness;

/// Config → catalog file → snapshot → public report.
#[test]
fn e2e_config_points_at_catalog_file() {
    let h = FeedHarness::with_pune();
    let catalog_path = h.write_catalog(&Catalog::pune(h.now));
    let config_path = h.write_file(
        "dashboard.toml",
        &format!(
            "catalog_path = {:?}\ntop_congested = 3\nview = \"public\"\n",
            catalog_path.display().to_string()
        ),
    );

    let config = DashboardConfig::from_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(config.view, ViewMode::Public);

    let snapshot = report::load_snapshot(&config, h.now).unwrap();
    assert_eq!(snapshot.junctions.len(), 18);

    let out = report::render(&snapshot, &config, h.now).unwrap();
    let top: Vec<&str> = out["public"]["top_congested"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_str().unwrap())
        .collect();
    assert_eq!(top, ["j1", "j2", "j5"]);
    assert!(out.get("operator").is_none());
}

/// A file-loaded catalog ignores any stored AQI status and re-derives it.
#[test]
fn e2e_catalog_file_status_is_rederived() {
    let h = FeedHarness::with_pune();
    let mut raw = serde_json::to_value(Catalog::pune(h.now)).unwrap();
    raw["aqi"]["current"] = serde_json::json!(230);
    raw["aqi"]["status"] = serde_json::json!("good");
    let path = h.write_file("catalog.json", &raw.to_string());

    let snapshot = Catalog::from_file(&path).unwrap().snapshot(h.now);
    let config = DashboardConfig::default();
    let out = report::render(&snapshot, &config, h.now).unwrap();
    assert_eq!(out["public"]["aqi"]["status"], "hazardous");
    assert_eq!(out["operator"]["aqi"]["label"], "Hazardous");
    assert_eq!(out["operator"]["aqi"]["exceeds_alert_level"], true);
}

#[test]
fn e2e_invalid_catalog_rejected_at_load() {
    let h = FeedHarness::with_pune();
    let mut catalog = Catalog::pune(h.now);
    catalog.junctions[3].congestion_level = 140;
    let path = h.write_catalog(&catalog);

    let config = DashboardConfig {
        catalog_path: Some(path),
        ..Default::default()
    };
    let err = report::load_snapshot(&config, h.now).unwrap_err();
    assert_eq!(
        err,
        FeedError::invalid("junction", "j4", "congestion 140 exceeds 100")
    );
}

#[test]
fn e2e_malformed_catalog_is_parse_error() {
    let h = FeedHarness::with_pune();
    let path = h.write_file("catalog.json", "{ not json");
    assert!(matches!(Catalog::from_file(&path), Err(FeedError::Parse(_))));
}

#[test]
fn e2e_config_rejects_out_of_range_threshold() {
    let h = FeedHarness::with_pune();
    let path = h.write_file("dashboard.toml", "congestion_warning_pct = 150\n");
    assert!(DashboardConfig::from_file(path.to_str().unwrap()).is_err());
}

/// Operator report against the built-in catalog at a fixed clock.
#[test]
fn e2e_operator_report_contents() {
    let h = FeedHarness::with_pune();
    let config = DashboardConfig {
        view: ViewMode::Operator,
        ..Default::default()
    };
    let out = report::render(&h.snapshot, &config, h.now).unwrap();
    let op = &out["operator"];

    assert_eq!(op["active_alert_count"], 8);
    assert_eq!(op["critical_count"], 2);
    assert_eq!(op["active_response_count"], 3);
    assert_eq!(op["alerts"][3]["age"], "2m ago");
    assert_eq!(op["alerts"][3]["type"], "emergency");
    assert_eq!(op["responses"][0]["eta"], "6 min");
    assert_eq!(op["stats"]["total_vehicles"], 52_890);
    assert_eq!(op["upcoming_events"].as_array().unwrap().len(), 4);
}
