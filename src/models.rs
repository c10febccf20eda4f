use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AppError;

// ============================================================================
// API Ninjas Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: f64,
}

#[derive(Debug, Deserialize)]
pub struct CountryRecord {
    pub gdp: f64,
    pub population: f64,
}

// ============================================================================
// Open-Meteo API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct HistoricalResponse {
    pub hourly: HourlyData,
}

/// Hourly series as returned by Open-Meteo. Gaps in the record come back
/// as `null`.
#[derive(Debug, Deserialize)]
pub struct HourlyData {
    pub surface_pressure: Option<Vec<Option<f64>>>,
    pub cloud_cover: Option<Vec<Option<f64>>>,
    pub wind_speed_80m: Option<Vec<Option<f64>>>,
    pub direct_radiation: Option<Vec<Option<f64>>>,
    pub temperature_2m: Option<Vec<Option<f64>>>,
}

impl HourlyData {
    pub fn series(&self, variable: WeatherVariable) -> Option<&[Option<f64>]> {
        let series = match variable {
            WeatherVariable::SurfacePressure => &self.surface_pressure,
            WeatherVariable::CloudCoverage => &self.cloud_cover,
            WeatherVariable::WindSpeed => &self.wind_speed_80m,
            WeatherVariable::SolarRadiance => &self.direct_radiation,
            WeatherVariable::Temperature => &self.temperature_2m,
        };
        series.as_deref()
    }
}

// ============================================================================
// Weather
// ============================================================================

/// The five hourly variables averaged for every location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherVariable {
    SurfacePressure,
    CloudCoverage,
    WindSpeed,
    SolarRadiance,
    Temperature,
}

impl WeatherVariable {
    /// Request order for the `hourly` query parameter.
    pub const ALL: [WeatherVariable; 5] = [
        WeatherVariable::SurfacePressure,
        WeatherVariable::CloudCoverage,
        WeatherVariable::WindSpeed,
        WeatherVariable::SolarRadiance,
        WeatherVariable::Temperature,
    ];

    /// Series name used by Open-Meteo
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::SurfacePressure => "surface_pressure",
            Self::CloudCoverage => "cloud_cover",
            Self::WindSpeed => "wind_speed_80m",
            Self::SolarRadiance => "direct_radiation",
            Self::Temperature => "temperature_2m",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::SurfacePressure => "hPa",
            Self::CloudCoverage => "%",
            Self::WindSpeed => "km/h",
            Self::SolarRadiance => "W/m²",
            Self::Temperature => "°C",
        }
    }

    /// Comma-separated list for the `hourly` query parameter
    pub fn hourly_query() -> String {
        Self::ALL
            .iter()
            .map(|v| v.api_name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Mean of each weather variable over the historical window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherMeans {
    pub surface_pressure: f64,
    pub cloud_coverage: f64,
    pub wind_speed: f64,
    pub solar_radiance: f64,
    pub temperature: f64,
}

impl WeatherMeans {
    /// Builds the means from a per-variable map. Every variable must be
    /// present.
    pub fn from_map(means: &BTreeMap<WeatherVariable, f64>) -> Result<Self, AppError> {
        let get = |variable: WeatherVariable| {
            means.get(&variable).copied().ok_or_else(|| {
                AppError::Upstream(format!("missing mean for {}", variable.api_name()))
            })
        };

        Ok(Self {
            surface_pressure: get(WeatherVariable::SurfacePressure)?,
            cloud_coverage: get(WeatherVariable::CloudCoverage)?,
            wind_speed: get(WeatherVariable::WindSpeed)?,
            solar_radiance: get(WeatherVariable::SolarRadiance)?,
            temperature: get(WeatherVariable::Temperature)?,
        })
    }

    pub fn get(&self, variable: WeatherVariable) -> f64 {
        match variable {
            WeatherVariable::SurfacePressure => self.surface_pressure,
            WeatherVariable::CloudCoverage => self.cloud_coverage,
            WeatherVariable::WindSpeed => self.wind_speed,
            WeatherVariable::SolarRadiance => self.solar_radiance,
            WeatherVariable::Temperature => self.temperature,
        }
    }
}

// ============================================================================
// Location
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFacts {
    pub city: String,
    pub country_code: String,
    pub longitude: f64,
    pub latitude: f64,
    /// People per km²
    pub population_density: f64,
    pub gdp_per_capita: f64,
    pub local_gdp: f64,
}

// ============================================================================
// Request Models
// ============================================================================

/// Form fields submitted from the index page and query parameters of the
/// JSON endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}
