//! SustainableSpot
//!
//! Looks up a city's coordinates and economy, averages a window of
//! historical weather, and recommends a mix of wind, solar and nuclear
//! power for it.

pub mod config;
pub mod constants;
pub mod countries;
pub mod error;
pub mod formatters;
pub mod models;
pub mod scoring;
pub mod service;
pub mod web;

pub use config::{AppConfig, ScoringConfig};
pub use error::{AppError, ScoreError};
pub use service::{Recommendation, RecommendationService};
