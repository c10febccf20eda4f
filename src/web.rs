use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Form, Router,
};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::formatters::{format_recommendation, RecommendationView};
use crate::models::RecommendRequest;
use crate::service::{Recommendation, RecommendationService};

// ============================================================================
// Pages
// ============================================================================

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub city: String,
    pub country: String,
    pub result: Option<RecommendationView>,
    pub error: Option<String>,
}

impl IndexTemplate {
    fn empty() -> Self {
        Self {
            city: String::new(),
            country: String::new(),
            result: None,
            error: None,
        }
    }
}

fn render(template: IndexTemplate) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        format!("Template error: {}", e)
    }))
}

async fn index_page() -> impl IntoResponse {
    render(IndexTemplate::empty())
}

async fn submit_form(
    State(service): State<RecommendationService>,
    Form(request): Form<RecommendRequest>,
) -> Response {
    let mut page = IndexTemplate {
        city: request.city.clone(),
        country: request.country.clone(),
        ..IndexTemplate::empty()
    };

    match service.recommend(&request.city, &request.country).await {
        Ok(rec) => {
            page.result = Some(format_recommendation(&rec));
            render(page).into_response()
        }
        Err(e) => {
            tracing::warn!("Recommendation failed for '{}', '{}': {}", request.city, request.country, e);
            page.error = Some(e.user_message());
            (e.status_code(), render(page)).into_response()
        }
    }
}

// ============================================================================
// JSON endpoints
// ============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.user_message() }));
        (self.status_code(), body).into_response()
    }
}

async fn recommend_json(
    State(service): State<RecommendationService>,
    Query(request): Query<RecommendRequest>,
) -> Result<Json<Recommendation>, AppError> {
    let rec = service
        .recommend(&request.city, &request.country)
        .await
        .map_err(|e| {
            tracing::warn!("Recommendation failed: {}", e);
            e
        })?;
    Ok(Json(rec))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Builds the application router
pub fn router(service: RecommendationService) -> Router {
    Router::new()
        .route("/", get(index_page).post(submit_form))
        .route("/api/recommend", get(recommend_json))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_form_and_no_results() {
        let html = IndexTemplate::empty().render().unwrap();
        assert!(html.contains("name=\"city\""));
        assert!(html.contains("name=\"country\""));
        assert!(!html.contains("id=\"results\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_error_page_escapes_input() {
        let page = IndexTemplate {
            city: "<script>".to_string(),
            country: String::new(),
            result: None,
            error: Some("We couldn't find city '<b>'.".to_string()),
        };
        let html = page.render().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("class=\"error\""));
    }
}
