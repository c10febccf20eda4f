use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;

use crate::config::AppConfig;
use crate::constants::{API_KEY_HEADER, CITY_SIDE_KM, USER_AGENT};
use crate::countries::country_code;
use crate::error::AppError;
use crate::models::{
    CityRecord, CountryRecord, HistoricalResponse, LocationFacts, WeatherMeans, WeatherVariable,
};
use crate::scoring::{self, DensityTier, EnergyParams, EnergyScore};

/// Everything computed for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub location: LocationFacts,
    pub weather: WeatherMeans,
    pub tier: DensityTier,
    pub score: EnergyScore,
    pub params: EnergyParams,
}

/// Looks up a location, aggregates its weather and scores it
#[derive(Clone)]
pub struct RecommendationService {
    client: Arc<Client>,
    config: Arc<AppConfig>,
}

impl RecommendationService {
    /// Creates a new service with a shared HTTP client
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
        })
    }

    /// Sends the request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "request failed with status: {}",
                response.status()
            )));
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    fn ninjas_get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.api_ninjas_base.trim_end_matches('/'), path);
        self.client
            .get(url)
            .header(API_KEY_HEADER, &self.config.api_ninjas_key)
    }

    /// Resolves a city and country name into coordinates and economic facts
    pub async fn resolve_location(&self, city: &str, country: &str) -> Result<LocationFacts, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::InvalidInput("city name is empty".to_string()));
        }
        if country.trim().is_empty() {
            return Err(AppError::InvalidInput("country name is empty".to_string()));
        }

        let iso2 = country_code(country).ok_or_else(|| {
            AppError::InvalidInput(format!("unknown country '{}'", country.trim()))
        })?;

        tracing::info!("Looking up city '{}' in {}", city, iso2);

        let cities: Vec<CityRecord> = self
            .make_request(self.ninjas_get("city").query(&[("name", city), ("country", iso2)]))
            .await?;
        let city_record = cities
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("city '{}' in {}", city, iso2)))?;

        let countries: Vec<CountryRecord> = self
            .make_request(self.ninjas_get("country").query(&[("name", iso2)]))
            .await?;
        let country_record = countries
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("country {}", iso2)))?;

        if country_record.population <= 0.0 {
            return Err(AppError::Upstream(format!(
                "country record for {} has no population",
                iso2
            )));
        }

        let gdp_per_capita = country_record.gdp / country_record.population;
        let population_density = city_record.population / CITY_SIDE_KM.powi(2);
        let local_gdp = gdp_per_capita * population_density * CITY_SIDE_KM;

        tracing::debug!(
            population_density,
            gdp_per_capita,
            local_gdp,
            "Resolved {} ({})",
            city_record.name,
            iso2
        );

        Ok(LocationFacts {
            city: city_record.name,
            country_code: iso2.to_string(),
            longitude: city_record.longitude,
            latitude: city_record.latitude,
            population_density,
            gdp_per_capita,
            local_gdp,
        })
    }

    /// Fetches the hourly history for the coordinates and averages each variable
    pub async fn aggregate_weather(&self, longitude: f64, latitude: f64) -> Result<WeatherMeans, AppError> {
        let window = self.config.window;
        tracing::info!(
            "Fetching hourly weather for {:.4}, {:.4} from {} to {}",
            latitude,
            longitude,
            window.start,
            window.end
        );

        let request = self.client.get(&self.config.open_meteo_url).query(&[
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("hourly", WeatherVariable::hourly_query()),
            ("start_date", window.start.format("%Y-%m-%d").to_string()),
            ("end_date", window.end.format("%Y-%m-%d").to_string()),
        ]);
        let history: HistoricalResponse = self.make_request(request).await?;

        let mut means = BTreeMap::new();
        for variable in WeatherVariable::ALL {
            let series = history.hourly.series(variable).ok_or_else(|| {
                AppError::Upstream(format!("no {} series in response", variable.api_name()))
            })?;
            let value = mean(series).ok_or_else(|| {
                AppError::Upstream(format!("no data for {} in window", variable.api_name()))
            })?;
            means.insert(variable, value);
        }

        WeatherMeans::from_map(&means)
    }

    /// Runs the full lookup and scoring pipeline for one request
    #[instrument(skip(self), level = "info")]
    pub async fn recommend(&self, city: &str, country: &str) -> Result<Recommendation, AppError> {
        let location = self.resolve_location(city, country).await?;
        let weather = self
            .aggregate_weather(location.longitude, location.latitude)
            .await?;

        let report = scoring::score(
            &weather,
            location.local_gdp,
            location.population_density,
            &self.config.scoring,
        )?;

        tracing::info!(
            "Recommendation for {}: wind {:.2}%, solar {:.2}%, nuclear {:.2}%",
            location.city,
            report.score.wind.percentage,
            report.score.solar.percentage,
            report.score.nuclear.percentage
        );

        Ok(Recommendation {
            location,
            weather,
            tier: report.tier,
            score: report.score,
            params: report.params,
        })
    }
}

/// Arithmetic mean of the non-null values, or `None` if there are none.
fn mean(series: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = series
        .iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
