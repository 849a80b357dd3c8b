//! Stores downloaded credentials on disk.
use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use log::{debug, info};
use serde::Serialize;

use crate::{error::Error, types::Credential};

/// Outcome of [`ensure_directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Created,
    Existing,
}

/// Creates `path` unless it already exists. Parent directories are not created.
pub fn ensure_directory(path: &Path) -> Result<DirectoryStatus, Error> {
    match fs::create_dir(path) {
        Ok(()) => {
            info!("Directory created: {}", path.display());
            Ok(DirectoryStatus::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            info!("Directory already exists: {}", path.display());
            Ok(DirectoryStatus::Existing)
        }
        Err(e) => Err(Error::create_directory(path.to_path_buf(), e)),
    }
}

/// Serializes `value` as JSON indented with 4 spaces.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

/// Writes the `data` of every credential to `directory/<file_name>`, in order.
///
/// Existing files are overwritten, so a repeated file name keeps the last record.
/// Stops at the first failure; files written before it are left in place.
pub fn write_credentials(
    directory: &Path,
    credentials: &[Credential],
) -> Result<Vec<PathBuf>, Error> {
    let mut written = Vec::with_capacity(credentials.len());
    for credential in credentials {
        let path = credential_path(directory, &credential.file_name)?;
        let json = to_pretty_json(&credential.data)?;
        debug!("Writing {:?} to {}", credential.data, path.display());
        fs::write(&path, json).map_err(|e| Error::write_file(path.clone(), e))?;
        info!("JSON file created successfully: {}", credential.file_name);
        written.push(path);
    }
    Ok(written)
}

// file names come from the server: only plain components, so nothing lands outside `directory`
fn credential_path(directory: &Path, file_name: &str) -> Result<PathBuf, Error> {
    let relative = Path::new(file_name);
    let plain = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if file_name.is_empty() || !plain {
        return Err(Error::unsafe_file_name(file_name));
    }
    Ok(directory.join(relative))
}
