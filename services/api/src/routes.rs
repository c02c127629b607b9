use crate::infra::{resolve_policy, AppState};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use bloodflow::auth::{Registration, Session, SignInRequest};
use bloodflow::error::{AppError, ClassificationError};
use bloodflow::inventory::{
    aggregate_inventory, InventoryCardView, InventoryInput, InventoryRecord, InventorySummary,
};
use bloodflow::risk::{
    population_at_risk, ranked_district_views, DistrictInput, DistrictRecord, DistrictRiskView,
};
use bloodflow::views::{
    analytics_view, dashboard_view, donor_view, AnalyticsData, AnalyticsTab, AnalyticsView,
    DashboardData, DashboardTab, DashboardView, DonorData, DonorView,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardQuery {
    #[serde(default)]
    pub(crate) tab: DashboardTab,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyticsQuery {
    #[serde(default)]
    pub(crate) tab: AnalyticsTab,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DonorQuery {
    #[serde(default)]
    pub(crate) request: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyInventoryRequest {
    pub(crate) records: Vec<InventoryInput>,
    #[serde(default)]
    pub(crate) critical_ratio: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyInventoryResponse {
    pub(crate) critical_ratio: f64,
    pub(crate) summary: InventorySummary,
    pub(crate) records: Vec<InventoryCardView>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankDistrictsRequest {
    pub(crate) districts: Vec<DistrictInput>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankDistrictsResponse {
    pub(crate) districts: Vec<DistrictRiskView>,
    pub(crate) population_at_risk: u64,
}

pub(crate) fn app_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard", get(dashboard_endpoint))
        .route("/api/v1/analytics", get(analytics_endpoint))
        .route("/api/v1/donor", get(donor_endpoint))
        .route("/api/v1/inventory/classify", post(classify_inventory_endpoint))
        .route("/api/v1/districts/rank", post(rank_districts_endpoint))
        .route("/api/v1/auth/sign-in", post(sign_in_endpoint))
        .route("/api/v1/auth/register", post(register_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardView> {
    debug!(tab = query.tab.slug(), "dashboard requested");
    Json(dashboard_view(
        &DashboardData::sample(),
        &state.policy,
        query.tab,
    ))
}

pub(crate) async fn analytics_endpoint(Query(query): Query<AnalyticsQuery>) -> Json<AnalyticsView> {
    debug!(tab = query.tab.slug(), "analytics requested");
    Json(analytics_view(&AnalyticsData::sample(), query.tab))
}

pub(crate) async fn donor_endpoint(Query(query): Query<DonorQuery>) -> Json<DonorView> {
    Json(donor_view(&DonorData::sample(), query.request))
}

pub(crate) async fn classify_inventory_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ClassifyInventoryRequest>,
) -> Result<Json<ClassifyInventoryResponse>, AppError> {
    let policy = resolve_policy(&state.policy, payload.critical_ratio)?;
    let records = payload
        .records
        .into_iter()
        .map(InventoryRecord::try_from)
        .collect::<Result<Vec<_>, ClassificationError>>()?;

    let classified = policy.classify_all(&records);
    let summary = aggregate_inventory(&classified);
    info!(
        records = records.len(),
        critical = summary.critical_count,
        critical_ratio = policy.critical_ratio(),
        "inventory classified"
    );

    Ok(Json(ClassifyInventoryResponse {
        critical_ratio: policy.critical_ratio(),
        summary,
        records: classified.iter().map(|item| item.to_view()).collect(),
    }))
}

pub(crate) async fn rank_districts_endpoint(
    Json(payload): Json<RankDistrictsRequest>,
) -> Result<Json<RankDistrictsResponse>, AppError> {
    let districts = payload
        .districts
        .into_iter()
        .map(DistrictRecord::try_from)
        .collect::<Result<Vec<_>, ClassificationError>>()?;

    Ok(Json(RankDistrictsResponse {
        districts: ranked_district_views(&districts),
        population_at_risk: population_at_risk(&districts),
    }))
}

pub(crate) async fn sign_in_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<Session>, AppError> {
    let session = state.authenticator.sign_in(request).await?;
    Ok(Json(session))
}

pub(crate) async fn register_endpoint(
    Extension(state): Extension<AppState>,
    Json(registration): Json<Registration>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let session = state.authenticator.register(registration).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::test_support::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router(ready: bool) -> Router {
        app_routes().layer(Extension(test_state(ready)))
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let response = router(false)
            .oneshot(get_request("/ready"))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = router(true)
            .oneshot(get_request("/ready"))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn dashboard_defaults_to_overview() {
        let response = router(true)
            .oneshot(get_request("/api/v1/dashboard"))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        assert_eq!(payload["tab"], "overview");
        assert_eq!(payload["summary"]["total_units"], 243);
        assert_eq!(payload["inventory"].as_array().map(Vec::len), Some(8));
        assert_eq!(payload["alerts"][0]["emphasis"], "destructive");
        assert!(payload.get("drives").is_none());
    }

    #[tokio::test]
    async fn dashboard_rejects_unknown_tab() {
        let response = router(true)
            .oneshot(get_request("/api/v1/dashboard?tab=history"))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn analytics_geospatial_ranks_districts() {
        let response = router(true)
            .oneshot(get_request("/api/v1/analytics?tab=geospatial"))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        assert_eq!(payload["districts"][0]["name"], "Uptown");
        assert_eq!(payload["districts"][0]["tier"], "high");
        assert!(payload.get("data_sources").is_none());
    }

    #[tokio::test]
    async fn donor_marks_selected_request() {
        let response = router(true)
            .oneshot(get_request("/api/v1/donor?request=3"))
            .await
            .expect("router dispatch");
        let payload = read_json(response).await;
        assert_eq!(payload["selected_request"], 3);
        assert_eq!(payload["requests"][2]["selected"], true);
        assert_eq!(payload["requests"][0]["selected"], false);
    }

    #[tokio::test]
    async fn classify_inventory_applies_default_cutoff() {
        let response = router(true)
            .oneshot(post_json(
                "/api/v1/inventory/classify",
                json!({
                    "records": [
                        { "blood_type": "O+", "current_units": 45, "required_units": 60 },
                        { "blood_type": "A+", "current_units": 78, "required_units": 50 },
                        { "blood_type": "B-", "current_units": 12, "required_units": 20 },
                        { "blood_type": "AB-", "current_units": 8, "required_units": 10 }
                    ]
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        assert_eq!(payload["critical_ratio"], 0.6);
        assert_eq!(payload["summary"]["critical_count"], 0);
        assert_eq!(payload["summary"]["low_count"], 3);
        assert_eq!(payload["summary"]["good_count"], 1);
        assert_eq!(payload["summary"]["total_units"], 143);
        assert_eq!(payload["records"][1]["delta_label"], "+28 surplus");
    }

    #[tokio::test]
    async fn classify_inventory_honours_cutoff_override() {
        let response = router(true)
            .oneshot(post_json(
                "/api/v1/inventory/classify",
                json!({
                    "records": [
                        { "blood_type": "B-", "current_units": 12, "required_units": 20 }
                    ],
                    "critical_ratio": 0.7
                }),
            ))
            .await
            .expect("router dispatch");
        let payload = read_json(response).await;
        assert_eq!(payload["records"][0]["status"], "critical");
        assert_eq!(payload["records"][0]["emphasis"], "destructive");
    }

    #[tokio::test]
    async fn classify_inventory_rejects_zero_requirement() {
        let response = router(true)
            .oneshot(post_json(
                "/api/v1/inventory/classify",
                json!({
                    "records": [
                        { "blood_type": "O-", "current_units": 4, "required_units": 0 }
                    ]
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json(response).await;
        assert!(payload["error"]
            .as_str()
            .is_some_and(|message| message.contains("required units")));
    }

    #[tokio::test]
    async fn classify_inventory_rejects_negative_counts_as_bad_request() {
        for record in [
            json!({ "blood_type": "O-", "current_units": 4, "required_units": -5 }),
            json!({ "blood_type": "O-", "current_units": -4, "required_units": 5 }),
        ] {
            let response = router(true)
                .oneshot(post_json(
                    "/api/v1/inventory/classify",
                    json!({ "records": [record] }),
                ))
                .await
                .expect("router dispatch");
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let payload = read_json(response).await;
            assert!(payload["error"]
                .as_str()
                .is_some_and(|message| message.contains("-5") || message.contains("-4")));
        }
    }

    #[tokio::test]
    async fn rank_districts_orders_by_score() {
        let response = router(true)
            .oneshot(post_json(
                "/api/v1/districts/rank",
                json!({
                    "districts": [
                        { "name": "A", "risk_score": 58, "population": 10 },
                        { "name": "B", "risk_score": 91, "population": 20 },
                        { "name": "C", "risk_score": 72, "population": 30 }
                    ]
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        let names: Vec<&str> = payload["districts"]
            .as_array()
            .expect("districts array")
            .iter()
            .filter_map(|district| district["name"].as_str())
            .collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(payload["population_at_risk"], 20);
    }

    #[tokio::test]
    async fn rank_districts_rejects_out_of_range_score() {
        let response = router(true)
            .oneshot(post_json(
                "/api/v1/districts/rank",
                json!({
                    "districts": [{ "name": "Harbor", "risk_score": 140, "population": 10 }]
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sign_in_returns_dashboard_redirect() {
        let response = router(true)
            .oneshot(post_json(
                "/api/v1/auth/sign-in",
                json!({ "email": "admin@bloodbank.org", "password": "secret" }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["redirect_to"], "/dashboard");
    }

    #[tokio::test]
    async fn sign_in_rejects_malformed_email() {
        let response = router(true)
            .oneshot(post_json(
                "/api/v1/auth/sign-in",
                json!({ "email": "admin", "password": "secret" }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn register_requires_accepted_terms() {
        let registration = json!({
            "organization_type": "blood-bank",
            "organization_name": "Central Blood Bank",
            "contact_email": "admin@organization.org",
            "region": "europe",
            "password": "secret",
            "accepted_terms": false
        });
        let response = router(true)
            .oneshot(post_json("/api/v1/auth/register", registration))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
