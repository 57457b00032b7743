use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

pub const STATUS_OK: i64 = 200;
pub const RESPONSE_VERSION: &str = "1.1.0";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to serialize response body: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to deserialize response body: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Body of every invocation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvInfo {
    pub message: String,
    pub version: String,
    pub timestamp: String,
    pub environment: String,
    pub s3_bucket: String,
    pub request_id: String,
}

impl EnvInfo {
    pub fn new(config: &AppConfig, request_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: config.message(),
            version: RESPONSE_VERSION.to_string(),
            timestamp: format_timestamp(now),
            environment: config.environment.clone(),
            s3_bucket: config.s3_bucket.clone(),
            request_id: request_id.into(),
        }
    }
}

/// The record handed back to the Lambda runtime. `body` holds the
/// JSON-encoded [`EnvInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: i64,
    pub body: String,
}

impl InvocationResponse {
    pub fn ok(info: &EnvInfo) -> Result<Self, ModelError> {
        Ok(Self {
            status_code: STATUS_OK,
            body: serde_json::to_string(info).map_err(ModelError::Serialize)?,
        })
    }

    pub fn env_info(&self) -> Result<EnvInfo, ModelError> {
        serde_json::from_str(&self.body).map_err(ModelError::Deserialize)
    }
}

/// ISO-8601 in UTC, microsecond precision, `Z` suffix.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Micros, true)
}
