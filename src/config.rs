use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use validator::Validate;

use crate::domain::HouseholdProfile;

/// Default on-disk location of the configuration document
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub rates: EnergyRates,
    #[validate(nested)]
    pub carbon: CarbonConfig,
    #[validate(nested)]
    pub simulation: SimulationDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Electricity price table. Every rate must be positive: a zero or negative
/// rate would silently corrupt every downstream cost figure, so load fails
/// instead.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnergyRates {
    #[validate(range(exclusive_min = 0.0))]
    pub standard: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub peak: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub off_peak: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CarbonConfig {
    #[validate(range(exclusive_min = 0.0))]
    pub emission_factor_lbs_per_kwh: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimulationDefaults {
    /// Profile assumed when a request does not name one
    pub default_profile: HouseholdProfile,
    #[validate(range(min = 1))]
    pub default_day_count: u32,
    /// Fixed seed for reproducible output (unset = fresh entropy per request)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                enable_cors: true,
                request_timeout_secs: 10,
            },
            rates: EnergyRates {
                standard: 0.12,
                peak: 0.18,
                off_peak: 0.08,
            },
            carbon: CarbonConfig {
                emission_factor_lbs_per_kwh: 0.92,
            },
            simulation: SimulationDefaults {
                default_profile: HouseholdProfile::MediumHouse,
                default_day_count: 30,
                random_seed: None,
            },
        }
    }
}

impl Config {
    /// Load configuration: built-in defaults, overlaid with the TOML file
    /// (absence is fine) and `HEI__`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("HEI__").split("__"));

        let config: Config = figment
            .extract()
            .context("failed to read configuration")?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;
        Ok(config)
    }

    /// Write the current configuration back to disk as TOML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let rendered = toml::to_string_pretty(self).context("failed to render configuration")?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path.as_ref(), rendered).context("failed to write configuration")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_builtin_table() {
        let config = Config::default();
        assert_eq!(config.rates.standard, 0.12);
        assert_eq!(config.rates.peak, 0.18);
        assert_eq!(config.rates.off_peak, 0.08);
        assert_eq!(config.carbon.emission_factor_lbs_per_kwh, 0.92);
        assert_eq!(
            config.simulation.default_profile,
            HouseholdProfile::MediumHouse
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.rates.standard, 0.12);
        assert_eq!(config.simulation.default_day_count, 30);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[rates]
standard = 0.15
peak = 0.25
off_peak = 0.09

[simulation]
default_profile = "Large House"
default_day_count = 60
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.rates.standard, 0.15);
        assert_eq!(config.rates.peak, 0.25);
        assert_eq!(
            config.simulation.default_profile,
            HouseholdProfile::LargeHouse
        );
        assert_eq!(config.simulation.default_day_count, 60);
        // Untouched sections keep their defaults
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_non_positive_rate_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[rates]\nstandard = 0.0\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_malformed_content_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[rates]\nstandard = \"free\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let mut config = Config::default();
        config.rates.standard = 0.14;
        config.simulation.random_seed = Some(1234);
        config.save(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.rates.standard, 0.14);
        assert_eq!(reloaded.simulation.random_seed, Some(1234));
    }
}
