//! Whole-file writes with atomic finalize.
//!
//! Content is written to `<dest>.part` and renamed over `dest`, so an
//! interrupted run never leaves a truncated asset or HTML file in place. When
//! `dest` already exists its permissions are carried over to the new file.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path of the temp file used while writing `dest`.
pub fn temp_path(dest: &Path) -> PathBuf {
    let mut os = dest.as_os_str().to_owned();
    os.push(TEMP_SUFFIX);
    PathBuf::from(os)
}

/// Writes `data` to `dest` via a temp file and rename. Overwrites `dest`,
/// keeping its permissions if it existed.
pub fn write_atomic(dest: &Path, data: &[u8]) -> Result<()> {
    let temp = temp_path(dest);
    let existing = fs::metadata(dest).ok().map(|m| m.permissions());
    let result = (|| -> Result<()> {
        let mut file = File::create(&temp)
            .with_context(|| format!("failed to create temp file: {}", temp.display()))?;
        file.write_all(data)
            .with_context(|| format!("write {}", temp.display()))?;
        if let Some(perms) = existing {
            file.set_permissions(perms)
                .with_context(|| format!("set permissions on {}", temp.display()))?;
        }
        file.sync_all()
            .with_context(|| format!("sync {}", temp.display()))?;
        fs::rename(&temp, dest).with_context(|| {
            format!("rename {} to {}", temp.display(), dest.display())
        })
    })();
    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}
