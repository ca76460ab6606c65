use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub delivery: DeliverySettings,
    pub seeding: SeedingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeliverySettings {
    /// Destination endpoint, required
    pub target: String,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedingSettings {
    /// Duration between tick starts, required
    pub interval_ms: u64,
    pub concurrency: u32,
    pub extensions: String,
    pub payload_size: usize,
    pub max_in_flight: usize,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values; target and interval stay required
            .set_default("delivery.request_timeout_ms", 30_000)?
            .set_default("seeding.concurrency", 1)?
            .set_default("seeding.extensions", "")?
            .set_default("seeding.payload_size", 0)?
            .set_default("seeding.max_in_flight", 1024)?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("SEEDER").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.seeding.interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.delivery.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_helpers() {
        let settings = Settings {
            delivery: DeliverySettings {
                target: "http://localhost:8080/".to_string(),
                request_timeout_ms: 2_500,
            },
            seeding: SeedingSettings {
                interval_ms: 1_000,
                concurrency: 1,
                extensions: String::new(),
                payload_size: 0,
                max_in_flight: 1024,
            },
        };
        assert_eq!(settings.interval(), Duration::from_secs(1));
        assert_eq!(settings.request_timeout(), Duration::from_millis(2_500));
    }

    #[test]
    fn test_missing_required_values_fail_loading() {
        // No config file and no SEEDER_* env in the test environment, so
        // the required target and interval are absent
        let result = Settings::new();
        assert!(result.is_err());
    }
}
