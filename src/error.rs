use std::{
    fmt::Display,
    io,
    path::PathBuf,
};

use reqwest::StatusCode;

#[derive(Debug)]
pub struct Error {
    inner: Inner,
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.inner,
            Inner::MissingVariable(_) | Inner::InvalidVariable { .. }
        )
    }

    /// Name of the environment variable that was not set, if that is what failed.
    pub fn missing_variable(&self) -> Option<&'static str> {
        if let Inner::MissingVariable(name) = self.inner {
            Some(name)
        } else {
            None
        }
    }

    /// Name of the environment variable holding a malformed value.
    pub fn invalid_variable(&self) -> Option<&'static str> {
        if let Inner::InvalidVariable { name, .. } = self.inner {
            Some(name)
        } else {
            None
        }
    }

    pub fn is_http_client(&self) -> bool {
        matches!(self.inner, Inner::HttpClient(_))
    }

    pub fn is_status(&self) -> bool {
        matches!(self.inner, Inner::Status(_))
    }

    pub fn status(&self) -> Option<StatusCode> {
        if let Inner::Status(status) = self.inner {
            Some(status)
        } else {
            None
        }
    }

    pub fn is_body_read(&self) -> bool {
        matches!(self.inner, Inner::BodyRead(_))
    }

    pub fn is_json(&self) -> bool {
        matches!(self.inner, Inner::Json(_))
    }

    pub fn is_create_directory(&self) -> bool {
        matches!(self.inner, Inner::CreateDirectory { .. })
    }

    pub fn is_unsafe_file_name(&self) -> bool {
        matches!(self.inner, Inner::UnsafeFileName(_))
    }

    pub fn is_write_file(&self) -> bool {
        matches!(self.inner, Inner::WriteFile { .. })
    }

    pub(crate) fn missing(name: &'static str) -> Self {
        Inner::MissingVariable(name).into()
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Display) -> Self {
        Inner::InvalidVariable {
            name,
            reason: reason.to_string(),
        }
        .into()
    }

    pub(crate) fn body_read(e: reqwest::Error) -> Self {
        Inner::BodyRead(e).into()
    }

    pub(crate) fn create_directory(path: PathBuf, source: io::Error) -> Self {
        Inner::CreateDirectory { path, source }.into()
    }

    pub(crate) fn unsafe_file_name(file_name: &str) -> Self {
        Inner::UnsafeFileName(file_name.to_string()).into()
    }

    pub(crate) fn write_file(path: PathBuf, source: io::Error) -> Self {
        Inner::WriteFile { path, source }.into()
    }
}

// causes are already part of `Display`
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Inner::Status(status).into(),
            None => Inner::from(e).into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Inner::from(e).into()
    }
}

impl From<Inner> for Error {
    fn from(inner: Inner) -> Self {
        Self { inner }
    }
}

#[derive(thiserror::Error, Debug)]
enum Inner {
    #[error("required variable {0} is not set")]
    MissingVariable(&'static str),
    #[error("invalid value for {name}: {reason}")]
    InvalidVariable { name: &'static str, reason: String },
    #[error("Request to the main server failed: {}", .0)]
    HttpClient(#[from] reqwest::Error),
    #[error("Main server responded with status {}", .0)]
    Status(StatusCode),
    #[error("Cannot read response body: {}", .0)]
    BodyRead(#[source] reqwest::Error),
    #[error("Invalid JSON: {}", .0)]
    Json(#[from] serde_json::Error),
    #[error("Cannot create directory {}: {}", .path.display(), .source)]
    CreateDirectory { path: PathBuf, source: io::Error },
    #[error("Refusing to write credential file {:?}: not a plain file name", .0)]
    UnsafeFileName(String),
    #[error("Cannot write file {}: {}", .path.display(), .source)]
    WriteFile { path: PathBuf, source: io::Error },
}
