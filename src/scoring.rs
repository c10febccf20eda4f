//! Renewable-energy recommendation model.
//!
//! Each source gets a cost-efficiency coefficient from the location's
//! weather means and economy. A density tier picks a per-source exponent
//! that favours or damps the source, and the coefficients are normalized
//! into percentages that sum to 100.

use serde::Serialize;
use std::f64::consts::PI;

use crate::config::{ScoringConfig, TierThresholds};
use crate::error::ScoreError;
use crate::models::WeatherMeans;

/// km/h to m/s
const KMH_TO_MS: f64 = 1000.0 / 3600.0;

/// Population density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityTier {
    Rural,
    Suburban,
    Urban,
}

impl DensityTier {
    pub fn from_density(density: f64, thresholds: &TierThresholds) -> Self {
        if density > thresholds.urban_above {
            Self::Urban
        } else if density < thresholds.rural_below {
            Self::Rural
        } else {
            Self::Suburban
        }
    }

    /// Index into the per-source exponent tables
    pub fn index(&self) -> usize {
        match self {
            Self::Rural => 0,
            Self::Suburban => 1,
            Self::Urban => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rural => "Rural",
            Self::Suburban => "Suburban",
            Self::Urban => "Urban",
        }
    }
}

/// Raw coefficient and normalized percentage for one source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceScore {
    pub coefficient: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyScore {
    pub wind: SourceScore,
    pub solar: SourceScore,
    pub nuclear: SourceScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindParams {
    pub average_wind_speed_kmh: f64,
    pub average_surface_pressure_hpa: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarParams {
    pub average_solar_radiance_wm2: f64,
    pub average_cloud_coverage_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NuclearParams {
    /// Startup cost divided by local GDP. `None` when local GDP is zero.
    pub startup_cost_to_gdp: Option<f64>,
    pub population_density: f64,
}

/// Descriptive figures shown alongside the score. Not used in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyParams {
    pub wind: WindParams,
    pub solar: SolarParams,
    pub nuclear: NuclearParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreReport {
    pub tier: DensityTier,
    pub score: EnergyScore,
    pub params: EnergyParams,
}

/// Scores the three energy sources for one location.
pub fn score(
    means: &WeatherMeans,
    local_gdp: f64,
    population_density: f64,
    config: &ScoringConfig,
) -> Result<ScoreReport, ScoreError> {
    non_negative("population density", population_density)?;
    non_negative("local GDP", local_gdp)?;
    non_negative("wind speed", means.wind_speed)?;
    non_negative("cloud coverage", means.cloud_coverage)?;
    non_negative("solar radiance", means.solar_radiance)?;
    finite("surface pressure", means.surface_pressure)?;
    finite("temperature", means.temperature)?;

    let tier = DensityTier::from_density(population_density, &config.tiers);
    let i = tier.index();

    let wind = wind_coefficient(means.wind_speed, config, config.wind.exponents[i]);
    let solar = solar_coefficient(
        means.solar_radiance,
        means.cloud_coverage,
        config,
        config.solar.exponents[i],
    );
    let nuclear = nuclear_coefficient(local_gdp, config, config.nuclear.exponents[i]);

    let sum = wind + solar + nuclear;
    if !(sum.is_finite() && sum > 0.0) {
        return Err(ScoreError::DegenerateCoefficients);
    }

    let share = |coefficient: f64| SourceScore {
        coefficient,
        percentage: round2(100.0 * coefficient / sum),
    };

    let startup_cost_to_gdp = if local_gdp > 0.0 {
        Some(config.nuclear.startup_cost / local_gdp)
    } else {
        None
    };

    tracing::debug!(
        ?tier,
        wind,
        solar,
        nuclear,
        "Computed cost-efficiency coefficients"
    );

    Ok(ScoreReport {
        tier,
        score: EnergyScore {
            wind: share(wind),
            solar: share(solar),
            nuclear: share(nuclear),
        },
        params: EnergyParams {
            wind: WindParams {
                average_wind_speed_kmh: means.wind_speed,
                average_surface_pressure_hpa: means.surface_pressure,
            },
            solar: SolarParams {
                average_solar_radiance_wm2: means.solar_radiance,
                average_cloud_coverage_pct: means.cloud_coverage,
            },
            nuclear: NuclearParams {
                startup_cost_to_gdp,
                population_density,
            },
        },
    })
}

/// Turbine power over the swept area, per unit of maintenance cost.
fn wind_coefficient(wind_speed_kmh: f64, config: &ScoringConfig, exponent: f64) -> f64 {
    let model = &config.wind;
    let swept_area = PI * model.rotor_radius_m.powi(2);
    let velocity = wind_speed_kmh * KMH_TO_MS;
    let power = 0.5 * model.power_coefficient * swept_area * velocity.powi(3);
    (power / model.maintenance_cost).powf(exponent)
}

fn solar_coefficient(
    radiance: f64,
    cloud_coverage_pct: f64,
    config: &ScoringConfig,
    exponent: f64,
) -> f64 {
    let model = &config.solar;
    let yield_proxy = radiance.powi(2) * (cloud_coverage_pct / 100.0) * model.panel_efficiency;
    (yield_proxy / model.maintenance_cost).powf(exponent)
}

/// Local GDP relative to the share of startup cost the city would carry.
fn nuclear_coefficient(local_gdp: f64, config: &ScoringConfig, exponent: f64) -> f64 {
    let model = &config.nuclear;
    model.base_yield.powf(exponent)
        * (local_gdp / (model.startup_financed_fraction * model.startup_cost))
}

/// Two decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn finite(field: &'static str, value: f64) -> Result<(), ScoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScoreError::InvalidInput { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ScoreError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ScoreError::InvalidInput { field, value });
    }
    Ok(())
}
