use lambda_runtime::{service_fn, Error};
use shared::config::AppConfig;
use tracing::info;

mod handler;

pub struct AppState {
    pub config: AppConfig,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .without_time()
        .init();

    let config = AppConfig::from_env();

    info!(environment = %config.environment, bucket = %config.s3_bucket, "Starting Lambda");

    let state = AppState { config };
    lambda_runtime::run(service_fn(|event| handler::handle(&state, event))).await
}
