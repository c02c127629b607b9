use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::app_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bloodflow::auth::MockAuthenticator;
use bloodflow::config::AppConfig;
use bloodflow::error::AppError;
use bloodflow::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        policy: config.classification.status_policy,
        authenticator: Arc::new(MockAuthenticator::from_config(&config.auth)),
    };

    let app = app_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        critical_ratio = config.classification.status_policy.critical_ratio(),
        "bloodflow api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
