use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::net::SocketAddr;
use std::time::Duration;

use crate::constants::{
    API_NINJAS_BASE, DEFAULT_ADDR, DEFAULT_TIMEOUT_SECS, OPEN_METEO_HISTORICAL_URL,
    WEATHER_END_DATE, WEATHER_START_DATE,
};

// ============================================================================
// Scoring model
// ============================================================================

/// Density thresholds (people/km²) separating the three tiers.
///
/// Both bounds are exclusive: a density equal to a threshold stays in the
/// middle tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierThresholds {
    pub rural_below: f64,
    pub urban_above: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindModel {
    /// Fraction of the wind's kinetic power a turbine captures
    pub power_coefficient: f64,
    pub rotor_radius_m: f64,
    pub maintenance_cost: f64,
    /// Exponent per density tier
    pub exponents: [f64; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolarModel {
    pub panel_efficiency: f64,
    pub maintenance_cost: f64,
    pub exponents: [f64; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct NuclearModel {
    pub base_yield: f64,
    pub startup_cost: f64,
    /// Share of the startup cost the city is expected to carry
    pub startup_financed_fraction: f64,
    pub exponents: [f64; 3],
}

/// Every constant the recommendation model depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub tiers: TierThresholds,
    pub wind: WindModel,
    pub solar: SolarModel,
    pub nuclear: NuclearModel,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tiers: TierThresholds {
                rural_below: 150.0,
                urban_above: 1200.0,
            },
            wind: WindModel {
                power_coefficient: 0.4,
                rotor_radius_m: 45.0,
                maintenance_cost: 45_000.0,
                exponents: [0.4, 0.6, 0.7],
            },
            solar: SolarModel {
                panel_efficiency: 0.4,
                maintenance_cost: 150.0,
                exponents: [1.0, 0.4, 0.15],
            },
            nuclear: NuclearModel {
                base_yield: 1.0,
                startup_cost: 2_500_000_000.0,
                startup_financed_fraction: 0.1,
                exponents: [0.0, 0.01, 1.0],
            },
        }
    }
}

// ============================================================================
// Process configuration
// ============================================================================

/// Historical date range queried from the weather service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for WeatherWindow {
    fn default() -> Self {
        Self {
            start: WEATHER_START_DATE,
            end: WEATHER_END_DATE,
        }
    }
}

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub api_ninjas_key: String,
    pub api_ninjas_base: String,
    pub open_meteo_url: String,
    pub request_timeout: Duration,
    pub window: WeatherWindow,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Builds a config pointing at the given upstream endpoints, with
    /// defaults for everything else.
    pub fn new(
        api_ninjas_key: impl Into<String>,
        api_ninjas_base: impl Into<String>,
        open_meteo_url: impl Into<String>,
    ) -> Self {
        Self {
            addr: DEFAULT_ADDR,
            api_ninjas_key: api_ninjas_key.into(),
            api_ninjas_base: api_ninjas_base.into(),
            open_meteo_url: open_meteo_url.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            window: WeatherWindow::default(),
            scoring: ScoringConfig::default(),
        }
    }

    /// Reads configuration from environment variables.
    ///
    /// `API_NINJAS_KEY` is required. `SUSTAINABLE_SPOT_ADDR`,
    /// `API_NINJAS_BASE_URL`, `OPEN_METEO_BASE_URL` and
    /// `SUSTAINABLE_SPOT_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let key = lookup("API_NINJAS_KEY")
            .filter(|k| !k.trim().is_empty())
            .context("API_NINJAS_KEY must be set")?;

        let mut config = Self::new(
            key,
            lookup("API_NINJAS_BASE_URL").unwrap_or_else(|| API_NINJAS_BASE.to_string()),
            lookup("OPEN_METEO_BASE_URL").unwrap_or_else(|| OPEN_METEO_HISTORICAL_URL.to_string()),
        );

        if let Some(addr) = lookup("SUSTAINABLE_SPOT_ADDR") {
            config.addr = addr
                .parse()
                .with_context(|| format!("invalid SUSTAINABLE_SPOT_ADDR: {}", addr))?;
        }

        if let Some(secs) = lookup("SUSTAINABLE_SPOT_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("invalid SUSTAINABLE_SPOT_TIMEOUT_SECS: {}", secs))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
