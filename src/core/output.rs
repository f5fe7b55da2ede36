//! Public output types for tagswap command responses.
//!
//! These types are part of the public API for command output, used by
//! CLI commands and consumers of the tagswap library.

use crate::core::encoding::Encoding;
use indexmap::IndexMap;
use serde::Serialize;

// ============================================================================
// Replace Operation
// ============================================================================

/// How the backup step went for one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupStatus {
    Created,
    AlreadyExists,
    SourceMissing,
}

/// How the substitution step went for one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceStatus {
    /// Tags matched and the new content was written back.
    Modified,
    /// No tag matched; the file was left unwritten.
    Unchanged,
    /// The target file does not exist.
    Missing,
    /// Read or write failed after the file was found.
    Failed,
}

/// Outcome for a single file in a replace run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    pub path: String,
    pub status: ReplaceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<BackupStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    /// Tags that matched, in application order.
    pub replaced_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counters over a replace run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub missing: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, status: ReplaceStatus) {
        self.total += 1;
        match status {
            ReplaceStatus::Modified => self.modified += 1,
            ReplaceStatus::Unchanged => self.unchanged += 1,
            ReplaceStatus::Missing => self.missing += 1,
            ReplaceStatus::Failed => self.failed += 1,
        }
    }
}

/// Full result of a replace run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOutput {
    pub variant: String,
    pub results: Vec<FileOutcome>,
    pub summary: RunSummary,
}

// ============================================================================
// Revert Operation
// ============================================================================

/// How the restore step went for one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevertStatus {
    /// The backup was moved back over the original.
    Restored,
    /// No backup exists for this path.
    NoBackup,
    /// The restore move failed.
    Failed,
}

/// Outcome for a single file in a revert run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreOutcome {
    pub path: String,
    pub status: RevertStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counters over a revert run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevertSummary {
    pub total: usize,
    pub restored: usize,
    pub no_backup: usize,
    pub failed: usize,
}

impl RevertSummary {
    pub fn record(&mut self, status: RevertStatus) {
        self.total += 1;
        match status {
            RevertStatus::Restored => self.restored += 1,
            RevertStatus::NoBackup => self.no_backup += 1,
            RevertStatus::Failed => self.failed += 1,
        }
    }
}

/// Full result of a revert run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevertOutput {
    pub results: Vec<RestoreOutcome>,
    pub summary: RevertSummary,
}

// ============================================================================
// Summarize Operation
// ============================================================================

/// One variant's name and full replacement table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSummary {
    pub name: String,
    pub replacements: IndexMap<String, String>,
}

/// Configuration contents as reported by the summarize action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeOutput {
    pub files: Vec<String>,
    pub variants: Vec<VariantSummary>,
}
