//! Environment based configuration.
use std::{env, fmt, path::PathBuf};

use reqwest::Url;

use crate::error::Error;

pub const ROBOT_CREDENTIAL_FOLDER: &str = "ROBOT_CREDENTIAL_FOLDER";
pub const MAIN_SERVER_API: &str = "MAIN_SERVER_API";
pub const SERVICE_KEY: &str = "SERVICE_KEY";
pub const USER_ID: &str = "USER_ID";
pub const PROCESS_ID: &str = "PROCESS_ID";
pub const PROCESS_VERSION: &str = "PROCESS_VERSION";

/// Required variables, in the order they are checked.
pub const REQUIRED_VARIABLES: [&str; 6] = [
    ROBOT_CREDENTIAL_FOLDER,
    MAIN_SERVER_API,
    SERVICE_KEY,
    USER_ID,
    PROCESS_ID,
    PROCESS_VERSION,
];

/// Everything needed to download the credentials of one robot process.
///
/// Built once at startup and never modified afterwards.
#[derive(Clone)]
pub struct Config {
    pub credential_folder: PathBuf,
    pub main_server_api: Url,
    pub service_key: String,
    pub user_id: i64,
    pub process_id: String,
    pub process_version: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration using `lookup` to resolve variable names.
    ///
    /// Unset and empty variables are both reported as missing. The first missing
    /// variable wins, then `USER_ID` and `MAIN_SERVER_API` are checked for
    /// well-formedness.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential_folder = require(&lookup, ROBOT_CREDENTIAL_FOLDER)?;
        let main_server_api = require(&lookup, MAIN_SERVER_API)?;
        let service_key = require(&lookup, SERVICE_KEY)?;
        let user_id = require(&lookup, USER_ID)?;
        let process_id = require(&lookup, PROCESS_ID)?;
        let process_version = require(&lookup, PROCESS_VERSION)?;

        let user_id = user_id.parse::<i64>().map_err(|e| {
            Error::invalid(USER_ID, format!("{:?} is not an integer ({})", user_id, e))
        })?;

        Ok(Self {
            credential_folder: PathBuf::from(credential_folder),
            main_server_api: parse_base_url(&main_server_api)?,
            service_key,
            user_id,
            process_id,
            process_version,
        })
    }
}

fn require<F>(lookup: &F, name: &'static str) -> Result<String, Error>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::missing(name)),
    }
}

fn parse_base_url(value: &str) -> Result<Url, Error> {
    let url = Url::parse(value).map_err(|e| Error::invalid(MAIN_SERVER_API, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid(
            MAIN_SERVER_API,
            format!("unsupported scheme {:?}", other),
        )),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("credential_folder", &self.credential_folder)
            .field("main_server_api", &self.main_server_api.as_str())
            .field("service_key", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("process_id", &self.process_id)
            .field("process_version", &self.process_version)
            .finish()
    }
}
