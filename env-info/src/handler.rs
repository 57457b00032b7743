use chrono::{DateTime, Utc};
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use shared::config::AppConfig;
use shared::models::{EnvInfo, InvocationResponse, ModelError};
use tracing::{info, instrument};

use crate::AppState;

/// Per-invocation metadata the handler needs from the host.
pub trait RequestContext {
    fn request_id(&self) -> &str;
}

impl RequestContext for Context {
    fn request_id(&self) -> &str {
        &self.request_id
    }
}

pub fn build_response(
    config: &AppConfig,
    context: &impl RequestContext,
    now: DateTime<Utc>,
) -> Result<InvocationResponse, ModelError> {
    let info = EnvInfo::new(config, context.request_id(), now);
    InvocationResponse::ok(&info)
}

#[instrument(skip(state, event), fields(request_id = %event.context.request_id))]
pub async fn handle(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error> {
    let response = build_response(&state.config, &event.context, Utc::now())?;

    info!(
        environment = %state.config.environment,
        status_code = response.status_code,
        "Handled invocation"
    );

    Ok(response)
}
