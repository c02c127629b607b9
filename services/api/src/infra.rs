use bloodflow::auth::Authenticator;
use bloodflow::error::ClassificationError;
use bloodflow::inventory::StatusPolicy;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) policy: StatusPolicy,
    pub(crate) authenticator: Arc<dyn Authenticator>,
}

/// Applies a per-request or per-invocation cutoff on top of the configured policy.
pub(crate) fn resolve_policy(
    configured: &StatusPolicy,
    critical_ratio: Option<f64>,
) -> Result<StatusPolicy, ClassificationError> {
    match critical_ratio {
        Some(ratio) => StatusPolicy::new(ratio),
        None => Ok(*configured),
    }
}
