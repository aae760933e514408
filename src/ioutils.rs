use std::path::Path;

use crate::error::{Error, Result};

/// Maps an IO error to a distinct permission error when that is its cause.
pub fn map_io_error<P: AsRef<Path>>(path: P, e: std::io::Error) -> Error {
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        Error::PermissionDeniedError { path: path.as_ref().display().to_string() }
    } else {
        Error::IoError(e)
    }
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|e| map_io_error(dest_path, e))
}

/// Writes content to a file, creating parent directories if needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(|e| map_io_error(dest_path, e))
}

/// Copies a file, creating parent directories if needed and carrying the
/// source modification time over to the copy.
pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path).map_err(|e| map_io_error(dest_path, e))?;

    let modified = std::fs::metadata(source_path)
        .and_then(|metadata| metadata.modified())
        .map_err(|e| map_io_error(source_path, e))?;
    let dest = std::fs::File::options()
        .write(true)
        .open(dest_path)
        .map_err(|e| map_io_error(dest_path, e))?;
    dest.set_modified(modified).map_err(|e| map_io_error(dest_path, e))?;

    Ok(())
}

/// Deletes a file if it exists. A missing file is only worth a warning.
pub fn delete_file<P: AsRef<Path>>(file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        log::warn!(
            "The file '{}' does not exist and cannot be deleted.",
            file_path.display()
        );
        return Ok(());
    }
    std::fs::remove_file(file_path).map_err(|e| map_io_error(file_path, e))?;
    log::info!("Deleted '{}'.", file_path.display());
    Ok(())
}
