use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use career_ai::assessment::{
    AssessmentResult, DimensionScores, PersonalityProfile, Questionnaire, ResponseSet,
};
use career_ai::careers::{
    analyze_skill_gaps, CareerCatalog, CareerMatcher, CareerRecommendation, CatalogKind,
    SkillGap, TraitProfile,
};
use career_ai::error::AppError;
use career_ai::market::{JobMarketData, SkillTrends};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::app::infra::{ApiState, AppState};

const DEFAULT_MARKET_LOCATION: &str = "Remote";

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: BTreeMap<String, u32>,
    #[serde(default)]
    pub(crate) started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(crate) completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatchRequest {
    pub(crate) answers: BTreeMap<String, u32>,
    #[serde(default)]
    pub(crate) skills: Vec<String>,
    #[serde(default)]
    pub(crate) catalog: CatalogKind,
}

#[derive(Debug, Serialize)]
pub(crate) struct MatchResponse {
    pub(crate) dimension_scores: DimensionScores,
    pub(crate) personality_profile: PersonalityProfile,
    pub(crate) traits: TraitProfile,
    pub(crate) cognitive_score: f64,
    pub(crate) recommendations: Vec<CareerRecommendation>,
    pub(crate) skill_gaps: Vec<SkillGap>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MarketQuery {
    #[serde(default)]
    pub(crate) location: Option<String>,
}

pub(crate) fn router(api: ApiState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questionnaire", get(questionnaire_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
        .route("/api/v1/careers/match", post(match_endpoint))
        .route("/api/v1/market/:role", get(market_endpoint))
        .route("/api/v1/skills/trends", get(skill_trends_endpoint))
        .with_state(api)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    if ready {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questionnaire_endpoint() -> Json<Questionnaire> {
    Json(Questionnaire::standard())
}

pub(crate) async fn score_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<AssessmentResult>, AppError> {
    let questionnaire = Questionnaire::standard();
    let responses = ResponseSet::from_map(&questionnaire, payload.answers)?;
    let completed_at = payload.completed_at.unwrap_or_else(Utc::now);
    let started_at = payload.started_at.unwrap_or(completed_at);

    Ok(Json(AssessmentResult::build(
        &questionnaire,
        &responses,
        started_at,
        completed_at,
    )))
}

pub(crate) async fn match_endpoint(
    Json(payload): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let questionnaire = Questionnaire::standard();
    let responses = ResponseSet::from_map(&questionnaire, payload.answers)?;
    let dimension_scores = career_ai::assessment::score_dimensions(&questionnaire, &responses);
    let traits = TraitProfile::from_dimensions(&dimension_scores, &payload.skills);

    let matcher = CareerMatcher::new(CareerCatalog::of_kind(payload.catalog));
    let recommendations = matcher.recommend(&traits);
    let skill_gaps = recommendations
        .first()
        .and_then(|top| matcher.catalog().find(&top.title))
        .map(|career| analyze_skill_gaps(&career.required_skills, &traits.skills.levels()))
        .unwrap_or_default();

    Ok(Json(MatchResponse {
        personality_profile: PersonalityProfile::synthesize(&dimension_scores),
        dimension_scores,
        cognitive_score: traits.aptitude.cognitive(),
        traits,
        recommendations,
        skill_gaps,
    }))
}

pub(crate) async fn market_endpoint(
    State(api): State<ApiState>,
    Path(role): Path<String>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<JobMarketData>, AppError> {
    let career = api
        .known_roles
        .find(&role)
        .ok_or_else(|| AppError::UnknownRole(role.clone()))?;
    let location = query
        .location
        .filter(|location| !location.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MARKET_LOCATION.to_string());

    Ok(Json(api.market.market_data(&career.title, &location)?))
}

pub(crate) async fn skill_trends_endpoint(
    State(api): State<ApiState>,
) -> Result<Json<SkillTrends>, AppError> {
    Ok(Json(api.market.skill_trends()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn orientation_answers() -> BTreeMap<String, u32> {
        [("o1", 4), ("o3", 0), ("o6", 0)]
            .into_iter()
            .map(|(id, value)| (id.to_string(), value))
            .collect()
    }

    #[tokio::test]
    async fn score_endpoint_reports_dimension_scores() {
        let request = ScoreRequest {
            answers: [("o1".to_string(), 4)].into_iter().collect(),
            started_at: None,
            completed_at: None,
        };
        let Json(result) = score_endpoint(Json(request)).await.expect("scored");
        assert_eq!(result.dimension_scores.orientation, 100);
        assert_eq!(result.dimension_scores.interest, 0);
        assert_eq!(result.time_taken_minutes, 0);
    }

    #[tokio::test]
    async fn score_endpoint_rejects_out_of_range_answers() {
        let request = ScoreRequest {
            answers: [("o1".to_string(), 9)].into_iter().collect(),
            started_at: None,
            completed_at: None,
        };
        let err = score_endpoint(Json(request)).await.expect_err("rejected");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn match_endpoint_ranks_extended_catalog() {
        let request = MatchRequest {
            answers: orientation_answers(),
            skills: vec!["Python".to_string()],
            catalog: CatalogKind::Extended,
        };
        let Json(body) = match_endpoint(Json(request)).await.expect("matched");
        assert_eq!(body.recommendations.len(), 6);
        assert!(body
            .recommendations
            .windows(2)
            .all(|pair| pair[0].match_percentage >= pair[1].match_percentage));
        assert!(!body.skill_gaps.is_empty());
        assert_eq!(body.cognitive_score, body.traits.aptitude.cognitive());
    }

    #[tokio::test]
    async fn router_serves_market_data_for_known_roles() {
        let app = router(ApiState::simulated(7));
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/market/data%20scientist?location=Seattle,%20WA")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("role"), Some(&json!("Data Scientist")));
        assert_eq!(payload.get("location"), Some(&json!("Seattle, WA")));

        let missing = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/market/Astronaut")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn router_serves_skill_trends() {
        let response = router(ApiState::simulated(7))
            .oneshot(
                Request::builder()
                    .uri("/api/v1/skills/trends")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload["trending"][0]["skill"], json!("Machine Learning"));
        assert_eq!(payload["declining"][0]["demand"], json!("Very Low"));
        assert_eq!(payload["stable"][1]["growth_percentage"], json!(12));
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(recorder.handle()),
        };
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn questionnaire_lists_standard_items() {
        let Json(questionnaire) = questionnaire_endpoint().await;
        assert_eq!(questionnaire.len(), 15);
    }
}
