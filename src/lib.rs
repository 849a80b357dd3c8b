//! # Robot credentials downloader
//!
//! Fetches the connection credentials of a robot process from the main server and
//! stores each of them as a JSON file.
//!
//! The client uses `reqwest` with `rustls` to perform the single HTTP request.
use std::{path::PathBuf, time::Duration};

use log::{debug, info};
use reqwest::{header, Url};

pub mod config;
mod error;
pub mod requests;
pub mod types;
pub mod writer;

pub use config::Config;
pub use error::Error;
pub use requests::CredentialsRequest;
pub use types::{Credential, CredentialData};
pub use writer::DirectoryStatus;

/// Main server API endpoints.
#[derive(Clone, Debug)]
pub struct CredentialAPI {
    connections_endpoint: Url,
}

impl CredentialAPI {
    /// Endpoints relative to `base_url`. Any path of `base_url` is kept.
    pub fn custom(base_url: &Url) -> Result<Self, Error> {
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            connections_endpoint: base_url
                .join(CredentialsRequest::endpoint())
                .map_err(|e| Error::invalid(config::MAIN_SERVER_API, e))?,
        })
    }

    pub fn connections_endpoint(&self) -> &Url {
        &self.connections_endpoint
    }
}

/// The client for the main server API.
///
/// Every request is authenticated with the `Service-Key` header.
pub struct CredentialAPIClient {
    api: CredentialAPI,
    client: reqwest::Client,
    service_key: String,
}

impl CredentialAPIClient {
    pub fn new(api: CredentialAPI, service_key: String) -> Result<Self, Error> {
        Ok(Self {
            api,
            client: CredentialAPIClient::create_client()?,
            service_key,
        })
    }

    fn create_client() -> Result<reqwest::Client, Error> {
        Ok(reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(5))
            .default_headers({
                let mut headers = header::HeaderMap::new();
                headers.insert(
                    header::USER_AGENT,
                    header::HeaderValue::from_static("reqwest (robot-credentials)"),
                );
                headers
            })
            .build()?)
    }

    /// Perform the `POST` request listing the connections of a robot process.
    ///
    /// Non-success statuses are reported as errors before the body is decoded.
    pub async fn fetch_credentials(
        &self,
        request: &CredentialsRequest,
    ) -> Result<Vec<Credential>, Error> {
        debug!(
            "Requesting credentials from {}: {:?}",
            self.api.connections_endpoint, request
        );
        let body = self
            .client
            .post(self.api.connections_endpoint.clone())
            .header(header::CONTENT_TYPE, CredentialsRequest::content_type())
            .header("Service-Key", &self.service_key)
            .body(request.body()?)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await
            .map_err(Error::body_read)?;

        let credentials: Vec<Credential> = serde_json::from_slice(&body)?;
        debug!("Got {} credentials", credentials.len());
        Ok(credentials)
    }
}

/// Download the credentials described by `config` and write them to its credential folder.
///
/// Nothing touches the filesystem unless the download succeeded. Returns the paths
/// of the written files.
pub async fn download_credentials(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let client = CredentialAPIClient::new(
        CredentialAPI::custom(&config.main_server_api)?,
        config.service_key.clone(),
    )?;
    let credentials = client
        .fetch_credentials(&CredentialsRequest::from(config))
        .await?;

    writer::ensure_directory(&config.credential_folder)?;
    info!("Folder ready: {}", config.credential_folder.display());

    writer::write_credentials(&config.credential_folder, &credentials)
}
