mod common;

use approx::assert_abs_diff_eq;
use common::*;
use sustainable_spot::scoring::DensityTier;
use sustainable_spot::AppError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_resolve_location_computes_density_and_gdp() {
    let server = MockServer::start().await;
    mount_city(&server, city_json()).await;
    mount_country(&server, country_json()).await;

    let service = service_for(&server);
    let facts = service.resolve_location("Toronto", "Canada").await.unwrap();

    assert_eq!(facts.city, "Toronto");
    assert_eq!(facts.country_code, "CA");
    assert_abs_diff_eq!(facts.latitude, 43.7);
    assert_abs_diff_eq!(facts.longitude, -79.42);
    assert_abs_diff_eq!(facts.population_density, 500.0);
    assert_abs_diff_eq!(facts.gdp_per_capita, 1000.0);
    assert_abs_diff_eq!(facts.local_gdp, 10_000_000.0);
}

#[tokio::test]
async fn test_resolve_location_accepts_country_code() {
    let server = MockServer::start().await;
    mount_city(&server, city_json()).await;
    mount_country(&server, country_json()).await;

    let service = service_for(&server);
    let facts = service.resolve_location(" Toronto ", "can").await.unwrap();
    assert_eq!(facts.country_code, "CA");
}

#[tokio::test]
async fn test_unknown_city_is_not_found() {
    let server = MockServer::start().await;
    mount_city(&server, serde_json::json!([])).await;
    mount_country(&server, country_json()).await;

    let service = service_for(&server);
    let err = service.resolve_location("Toronto", "Canada").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_empty_country_record_is_not_found() {
    let server = MockServer::start().await;
    mount_city(&server, city_json()).await;
    mount_country(&server, serde_json::json!([])).await;

    let service = service_for(&server);
    let err = service.resolve_location("Toronto", "Canada").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_zero_country_population_is_upstream_error() {
    let server = MockServer::start().await;
    mount_city(&server, city_json()).await;
    mount_country(&server, serde_json::json!([{ "gdp": 1.0, "population": 0.0 }])).await;

    let service = service_for(&server);
    let err = service.resolve_location("Toronto", "Canada").await.unwrap_err();
    match err {
        AppError::Upstream(msg) => assert!(msg.contains("no population"), "{}", msg),
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_city_body_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/city"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service.resolve_location("Toronto", "Canada").await.unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_country_record_missing_fields_is_upstream_error() {
    let server = MockServer::start().await;
    mount_city(&server, city_json()).await;
    mount_country(&server, serde_json::json!([{ "name": "Canada" }])).await;

    let service = service_for(&server);
    let err = service.resolve_location("Toronto", "Canada").await.unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_rejected_api_key_is_upstream_error() {
    let server = MockServer::start().await;
    // No mocks mounted: wiremock answers 404 to every request.
    let service = service_for(&server);
    let err = service.resolve_location("Toronto", "Canada").await.unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_aggregate_weather_averages_non_null_values() {
    let server = MockServer::start().await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(weather_json())).await;

    let service = service_for(&server);
    let means = service.aggregate_weather(-79.42, 43.7).await.unwrap();

    assert_abs_diff_eq!(means.surface_pressure, 1012.0);
    assert_abs_diff_eq!(means.cloud_coverage, 50.0);
    assert_abs_diff_eq!(means.wind_speed, 20.0);
    assert_abs_diff_eq!(means.solar_radiance, 200.0);
    assert_abs_diff_eq!(means.temperature, 15.0);
}

#[tokio::test]
async fn test_all_null_series_is_upstream_error() {
    let server = MockServer::start().await;
    let mut body = weather_json();
    body["hourly"]["wind_speed_80m"] = serde_json::json!([null, null, null]);
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let service = service_for(&server);
    let err = service.aggregate_weather(-79.42, 43.7).await.unwrap_err();
    match err {
        AppError::Upstream(msg) => assert!(msg.contains("wind_speed_80m"), "{}", msg),
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_series_is_upstream_error() {
    let server = MockServer::start().await;
    let mut body = weather_json();
    if let Some(hourly) = body["hourly"].as_object_mut() {
        hourly.remove("direct_radiation");
    }
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let service = service_for(&server);
    let err = service.aggregate_weather(-79.42, 43.7).await.unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_weather_service_failure_is_upstream_error() {
    let server = MockServer::start().await;
    mount_weather(&server, ResponseTemplate::new(500)).await;

    let service = service_for(&server);
    let err = service.aggregate_weather(-79.42, 43.7).await.unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_recommend_end_to_end() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    let service = service_for(&server);
    let rec = service.recommend("Toronto", "Canada").await.unwrap();

    assert_eq!(rec.tier, DensityTier::Suburban);
    assert_abs_diff_eq!(rec.score.nuclear.coefficient, 0.04, epsilon = 1e-12);
    assert_abs_diff_eq!(rec.score.wind.percentage, 34.26, epsilon = 1e-9);
    assert_abs_diff_eq!(rec.score.solar.percentage, 65.21, epsilon = 1e-9);
    assert_abs_diff_eq!(rec.score.nuclear.percentage, 0.53, epsilon = 1e-9);
    assert_eq!(rec.params.nuclear.startup_cost_to_gdp, Some(250.0));
    assert_abs_diff_eq!(rec.params.wind.average_surface_pressure_hpa, 1012.0);
}

#[tokio::test]
async fn test_recommend_twice_gives_same_result() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    let service = service_for(&server);
    let first = service.recommend("Toronto", "Canada").await.unwrap();
    let second = service.recommend("Toronto", "Canada").await.unwrap();
    assert_eq!(first, second);
}
