use std::fs::{File, OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::GenerationError;

pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<u64, GenerationError> {
    let data = serde_json::to_vec_pretty(value)?;
    write_with_atomic(path, |file| {
        file.write_all(&data)?;
        Ok(data.len() as u64)
    })
}

/// Write through `write` into a sibling temp file, then rename it over `path`.
///
/// The temp file is removed when `write` fails, leaving any previous file at
/// `path` untouched.
pub fn write_with_atomic<T, F>(path: &Path, write: F) -> Result<T, GenerationError>
where
    F: FnOnce(&mut File) -> Result<T, GenerationError>,
{
    if let Some(parent) = non_empty_parent(path) {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;

    let outcome = write(&mut file).and_then(|value| {
        file.sync_all()?;
        Ok(value)
    });
    drop(file);

    let value = match outcome {
        Ok(value) => value,
        Err(err) => {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(err);
        }
    };

    std::fs::rename(&tmp_path, path)?;
    if let Some(parent) = non_empty_parent(path) {
        sync_dir(parent)?;
    }

    Ok(value)
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

fn temp_path(path: &Path) -> Result<PathBuf, GenerationError> {
    let file_name = path.file_name().ok_or_else(|| {
        GenerationError::InvalidOptions(format!("invalid output path: {}", path.display()))
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}
