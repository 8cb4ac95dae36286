use std::{fs, path::Path};

use crate::SharedError;

/// Reads the whole fixture file into memory.
pub fn load_fixture(path: impl AsRef<Path>) -> Result<Vec<u8>, SharedError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| SharedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "Loaded fixture");
    Ok(data)
}
