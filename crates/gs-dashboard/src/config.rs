//! Dashboard configuration, loadable from TOML.

use std::path::PathBuf;

use serde::Deserialize;

use gs_feed_model::AQI_ALERT_LEVEL;

/// Which screens the binary renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Operator,
    Public,
    #[default]
    Both,
}

/// Top-level configuration for the dashboard binary.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// JSON catalog to load. None uses the built-in Pune catalog.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// How many junctions the public view ranks.
    #[serde(default = "default_top_congested")]
    pub top_congested: usize,
    /// Junctions strictly above this congestion percentage are flagged.
    #[serde(default = "default_congestion_warning_pct")]
    pub congestion_warning_pct: u8,
    /// AQI index above which the operator view raises its pollution badge.
    #[serde(default = "default_aqi_alert_level")]
    pub aqi_alert_level: u32,
    #[serde(default)]
    pub view: ViewMode,
}

fn default_top_congested() -> usize {
    5
}

fn default_congestion_warning_pct() -> u8 {
    80
}

fn default_aqi_alert_level() -> u32 {
    AQI_ALERT_LEVEL
}

impl DashboardConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        if config.congestion_warning_pct > 100 {
            anyhow::bail!(
                "congestion_warning_pct must be within 0-100, got {}",
                config.congestion_warning_pct
            );
        }
        Ok(config)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            top_congested: default_top_congested(),
            congestion_warning_pct: default_congestion_warning_pct(),
            aqi_alert_level: default_aqi_alert_level(),
            view: ViewMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DashboardConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.top_congested, 5);
        assert_eq!(config.congestion_warning_pct, 80);
        assert_eq!(config.aqi_alert_level, 150);
        assert_eq!(config.view, ViewMode::Both);
    }

    #[test]
    fn deserialize_empty_config_uses_defaults() {
        let config: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(config.top_congested, 5);
        assert_eq!(config.congestion_warning_pct, 80);
        assert_eq!(config.view, ViewMode::Both);
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
catalog_path = "/etc/gatisutra/catalog.json"
top_congested = 3
congestion_warning_pct = 70
aqi_alert_level = 200
view = "public"
"#;
        let config: DashboardConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(std::path::Path::new("/etc/gatisutra/catalog.json"))
        );
        assert_eq!(config.top_congested, 3);
        assert_eq!(config.congestion_warning_pct, 70);
        assert_eq!(config.aqi_alert_level, 200);
        assert_eq!(config.view, ViewMode::Public);
    }

    #[test]
    fn unknown_view_rejected() {
        assert!(toml::from_str::<DashboardConfig>(r#"view = "kiosk""#).is_err());
    }

    #[test]
    fn missing_file_is_error() {
        assert!(DashboardConfig::from_file("/nonexistent/gatisutra.toml").is_err());
    }
}
