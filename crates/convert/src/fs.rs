//! File input and output for conversions

use std::fs;
use std::path::Path;

use crate::error::{ConvertError, Result};

/// Read an HTML input file.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write LaTeX to a file, creating parent directories if necessary
pub fn write_output<P: AsRef<Path>>(path: P, latex: &str) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, latex).map_err(write_error)
}
