use serde::Serialize;

use crate::{config::Config, error::Error};

/// Ask the main server for the connections of a given version of a robot process.
///
/// Maps the body of `POST /connection/for-robot/version`. Process identifiers are
/// sent as strings even when they look numeric.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    pub user_id: i64,
    pub process_id: String,
    pub process_version: String,
}

impl CredentialsRequest {
    pub fn endpoint() -> &'static str {
        "connection/for-robot/version"
    }

    pub fn content_type() -> &'static str {
        "application/json"
    }

    pub fn body(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl From<&Config> for CredentialsRequest {
    fn from(config: &Config) -> Self {
        Self {
            user_id: config.user_id,
            process_id: config.process_id.clone(),
            process_version: config.process_version.clone(),
        }
    }
}
