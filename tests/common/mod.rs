//! Shared wiremock fixtures for the upstream APIs.

#![allow(dead_code)]

use sustainable_spot::{AppConfig, RecommendationService};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";

/// Toronto-like city record: 200,000 people over 400 km² gives density 500.
pub fn city_json() -> serde_json::Value {
    serde_json::json!([{
        "name": "Toronto",
        "latitude": 43.7,
        "longitude": -79.42,
        "country": "CA",
        "population": 200000,
        "is_capital": false
    }])
}

/// GDP 1,000,000 over population 1,000 gives GDP per capita 1,000.
pub fn country_json() -> serde_json::Value {
    serde_json::json!([{
        "name": "Canada",
        "iso2": "CA",
        "gdp": 1000000.0,
        "population": 1000.0
    }])
}

pub fn weather_json() -> serde_json::Value {
    serde_json::json!({
        "latitude": 43.7,
        "longitude": -79.42,
        "hourly": {
            "time": ["2023-06-15T00:00", "2023-06-15T01:00", "2023-06-15T02:00"],
            "surface_pressure": [1010.0, 1012.0, 1014.0],
            "cloud_cover": [50.0, 40.0, 60.0],
            "wind_speed_80m": [20.0, 20.0, 20.0],
            "direct_radiation": [200.0, null, 200.0],
            "temperature_2m": [10.0, 20.0, 15.0]
        }
    })
}

pub async fn mount_city(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/city"))
        .and(query_param("name", "Toronto"))
        .and(query_param("country", "CA"))
        .and(header("X-Api-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_country(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/country"))
        .and(query_param("name", "CA"))
        .and(header("X-Api-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_weather(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("start_date", "2023-06-15"))
        .and(query_param("end_date", "2024-01-01"))
        .and(query_param(
            "hourly",
            "surface_pressure,cloud_cover,wind_speed_80m,direct_radiation,temperature_2m",
        ))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Mounts all three upstream endpoints with the default fixtures.
pub async fn mount_happy_path(server: &MockServer) {
    mount_city(server, city_json()).await;
    mount_country(server, country_json()).await;
    mount_weather(server, ResponseTemplate::new(200).set_body_json(weather_json())).await;
}

pub fn service_for(server: &MockServer) -> RecommendationService {
    let config = AppConfig::new(
        API_KEY,
        server.uri(),
        format!("{}/v1/forecast", server.uri()),
    );
    RecommendationService::new(config).unwrap()
}
