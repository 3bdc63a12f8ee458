use std::fs;
use std::path::Path;

use crate::error::ProbeError;

pub fn delete_file(path: &Path) -> Result<(), ProbeError> {
    fs::remove_file(path).map_err(|source| ProbeError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_file(path: &Path) -> Result<String, ProbeError> {
    fs::read_to_string(path).map_err(|source| ProbeError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_file(path: &Path, contents: &str) -> Result<(), ProbeError> {
    fs::write(path, contents).map_err(|source| ProbeError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}
