use crate::models::WeatherVariable;
use crate::service::Recommendation;

/// A labelled value in one of the parameter tables
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRow {
    pub label: String,
    pub value: String,
}

impl ParamRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Display-ready view of a recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationView {
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    pub tier: String,
    pub wind_percentage: String,
    pub solar_percentage: String,
    pub nuclear_percentage: String,
    pub wind_params: Vec<ParamRow>,
    pub solar_params: Vec<ParamRow>,
    pub nuclear_params: Vec<ParamRow>,
    pub climate: Vec<ParamRow>,
}

/// Formats a recommendation for the results page
pub fn format_recommendation(rec: &Recommendation) -> RecommendationView {
    let weather_row = |label: &str, variable: WeatherVariable| {
        ParamRow::new(
            format!("{} ({})", label, variable.unit()),
            format!("{:.2}", rec.weather.get(variable)),
        )
    };

    let startup_ratio = match rec.params.nuclear.startup_cost_to_gdp {
        Some(ratio) => format_thousands(ratio),
        None => "n/a".to_string(),
    };

    RecommendationView {
        location: format!("{}, {}", rec.location.city, rec.location.country_code),
        latitude: format!("{:.4}", rec.location.latitude),
        longitude: format!("{:.4}", rec.location.longitude),
        tier: rec.tier.label().to_string(),
        wind_percentage: format_percentage(rec.score.wind.percentage),
        solar_percentage: format_percentage(rec.score.solar.percentage),
        nuclear_percentage: format_percentage(rec.score.nuclear.percentage),
        wind_params: vec![
            weather_row("Average Wind Speed", WeatherVariable::WindSpeed),
            weather_row("Average Atmospheric Pressure", WeatherVariable::SurfacePressure),
        ],
        solar_params: vec![
            weather_row("Average Direct Solar Radiance", WeatherVariable::SolarRadiance),
            weather_row("Average Cloud Coverage", WeatherVariable::CloudCoverage),
        ],
        nuclear_params: vec![
            ParamRow::new("Startup Cost vs City GDP", startup_ratio),
            ParamRow::new(
                "Population Density (people/km²)",
                format_thousands(rec.params.nuclear.population_density),
            ),
        ],
        climate: vec![
            weather_row("Average Temperature", WeatherVariable::Temperature),
            ParamRow::new(
                "GDP per Capita (USD)",
                format_thousands(rec.location.gdp_per_capita),
            ),
        ],
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Two decimals with a comma between every group of three integer digits
pub fn format_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}
