//! File I/O utilities with atomic writes
//!
//! Provides file operations that never leave a half-written destination
//! behind on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};

/// Write a file atomically (write to a sibling temp file, then rename)
///
/// `write` receives a buffered writer over the temp file. If it fails, or any
/// later step fails, the temp file is removed and `path` is left untouched.
pub fn write_atomic<P, F>(path: P, write: F) -> LedgerResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> LedgerResult<()>,
{
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(&temp_path).map_err(|e| {
        LedgerError::Io(format!(
            "Failed to create {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let result = write(&mut writer)
        .and_then(|()| {
            writer
                .flush()
                .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e)))
        })
        .and_then(|()| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| LedgerError::Io(format!("Failed to sync data: {}", e)))
        });

    if let Err(e) = result {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Io(format!(
            "Failed to move file into place at {}: {}",
            path.display(),
            e
        ))
    })
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> LedgerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, data)?;
        writeln!(writer)?;
        Ok(())
    })
}

fn temp_path_for(path: &Path) -> LedgerResult<PathBuf> {
    let mut name: OsString = path
        .file_name()
        .ok_or_else(|| LedgerError::Io(format!("Not a file path: {}", path.display())))?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}
