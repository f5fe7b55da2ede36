//! The revert flow: restore every target from its backup.

use crate::core::backup;
use crate::core::output::{RestoreOutcome, RevertOutput, RevertStatus, RevertSummary};
use crate::core::status::StatusSink;
use std::path::PathBuf;

/// Restore every target from its backup, in list order.
///
/// Same continue-on-failure policy as the replace flow: a file without a
/// backup or a failed move never stops the remaining restores.
pub fn run(files: &[PathBuf], sink: &mut dyn StatusSink) -> RevertOutput {
    let mut results = Vec::with_capacity(files.len());
    let mut summary = RevertSummary::default();

    for path in files {
        let outcome = match backup::restore(path, sink) {
            Ok(status) => RestoreOutcome {
                path: path.display().to_string(),
                status,
                error: None,
            },
            Err(e) => RestoreOutcome {
                path: path.display().to_string(),
                status: RevertStatus::Failed,
                error: Some(e.detail_text()),
            },
        };
        summary.record(outcome.status);
        results.push(outcome);
    }

    RevertOutput { results, summary }
}
