use chrono::NaiveDate;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "sustainable-spot/0.1.0";

/// API Ninjas base URL (city and country lookups)
pub const API_NINJAS_BASE: &str = "https://api.api-ninjas.com/v1";

/// Open-Meteo historical forecast endpoint
pub const OPEN_METEO_HISTORICAL_URL: &str =
    "https://historical-forecast-api.open-meteo.com/v1/forecast";

/// Header carrying the API Ninjas key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// First day of the historical weather window
pub const WEATHER_START_DATE: NaiveDate = date(2023, 6, 15);

/// Last day of the historical weather window
pub const WEATHER_END_DATE: NaiveDate = date(2024, 1, 1);

/// Side of the square a city is assumed to cover, in km
pub const CITY_SIDE_KM: f64 = 20.0;

/// Default listen address for the web server
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));

/// Default outbound request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Date constructor for constants; an invalid date fails compilation.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date"),
    }
}
