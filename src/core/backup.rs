//! Sidecar backups for files about to be modified.
//!
//! A backup lives next to its original as `<path>.bak` and always holds the
//! pre-substitution content: once created it is never overwritten, only
//! consumed by a restore.

use crate::core::error::Result;
use crate::core::output::{BackupStatus, RevertStatus};
use crate::core::status::StatusSink;
use crate::utils::io;
use std::path::{Path, PathBuf};

/// Backup path for a target: the full file name with `.bak` appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Create `<path>.bak` unless one already exists.
///
/// An existing backup is kept as is, so repeated replace runs still revert
/// to the original content. A missing source is a notice, not an error.
pub fn ensure(path: &Path, sink: &mut dyn StatusSink) -> Result<BackupStatus> {
    let backup = backup_path(path);

    if backup.exists() {
        sink.status(&format!("Backup already exists for {}", path.display()));
        return Ok(BackupStatus::AlreadyExists);
    }

    if !path.exists() {
        sink.status(&format!(
            "File not found: {}. Skipping backup.",
            path.display()
        ));
        return Ok(BackupStatus::SourceMissing);
    }

    io::copy_file(path, &backup, "create backup")?;
    sink.status(&format!(
        "Created a backup of {} as {}",
        path.display(),
        backup.display()
    ));
    Ok(BackupStatus::Created)
}

/// Move `<path>.bak` back over `<path>`, consuming the backup.
///
/// A missing backup is a notice, not an error.
pub fn restore(path: &Path, sink: &mut dyn StatusSink) -> Result<RevertStatus> {
    let backup = backup_path(path);

    if !backup.exists() {
        sink.status(&format!("No backup found for {}", path.display()));
        return Ok(RevertStatus::NoBackup);
    }

    io::rename_file(&backup, path, "restore backup")?;
    sink.status(&format!("Reverted changes for {}", path.display()));
    Ok(RevertStatus::Restored)
}
