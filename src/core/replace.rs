//! The replace flow: back up, substitute, write back.

use crate::core::backup;
use crate::core::config::Variant;
use crate::core::encoding::EncodingDetector;
use crate::core::error::ErrorCode;
use crate::core::output::{FileOutcome, ReplaceOutput, ReplaceStatus, RunSummary};
use crate::core::status::StatusSink;
use crate::utils::{io, template};
use std::path::{Path, PathBuf};

/// Apply a variant's replacements to every target, in list order.
///
/// One bad file never aborts the batch: per-file failures fold into the
/// outcome list and the loop continues.
pub fn run(
    files: &[PathBuf],
    variant: &Variant,
    detector: &dyn EncodingDetector,
    sink: &mut dyn StatusSink,
) -> ReplaceOutput {
    let mut results = Vec::with_capacity(files.len());
    let mut summary = RunSummary::default();

    for path in files {
        let outcome = process_file(path, variant, detector, sink);
        summary.record(outcome.status);
        results.push(outcome);
    }

    ReplaceOutput {
        variant: variant.name.clone(),
        results,
        summary,
    }
}

fn process_file(
    path: &Path,
    variant: &Variant,
    detector: &dyn EncodingDetector,
    sink: &mut dyn StatusSink,
) -> FileOutcome {
    // Backup comes first so `.bak` always holds pre-substitution content.
    let backup = match backup::ensure(path, sink) {
        Ok(status) => status,
        Err(e) => {
            return FileOutcome {
                path: path.display().to_string(),
                status: ReplaceStatus::Failed,
                backup: None,
                encoding: None,
                replaced_tags: Vec::new(),
                error: Some(e.detail_text()),
            }
        }
    };

    if !path.exists() {
        sink.status(&format!("File not found: {}. Skipping.", path.display()));
        return FileOutcome {
            path: path.display().to_string(),
            status: ReplaceStatus::Missing,
            backup: Some(backup),
            encoding: None,
            replaced_tags: Vec::new(),
            error: None,
        };
    }

    let encoding = detector.detect(path);

    let content = match io::read_file(path, encoding, "read target") {
        Ok(content) => content,
        // The file can disappear between the existence check and the read.
        Err(e) if e.code == ErrorCode::FileNotFound => {
            sink.status(&format!("File not found: {}. Skipping.", path.display()));
            return FileOutcome {
                path: path.display().to_string(),
                status: ReplaceStatus::Missing,
                backup: Some(backup),
                encoding: None,
                replaced_tags: Vec::new(),
                error: None,
            };
        }
        Err(e) => {
            return FileOutcome {
                path: path.display().to_string(),
                status: ReplaceStatus::Failed,
                backup: Some(backup),
                encoding: Some(encoding),
                replaced_tags: Vec::new(),
                error: Some(e.detail_text()),
            }
        }
    };

    let substitution = template::apply(&content, &variant.replacements);
    for (tag, value) in &substitution.replaced {
        sink.status(&format!(
            "Replaced '{}' with '{}' in {}",
            tag,
            value,
            path.display()
        ));
    }

    if !substitution.modified() {
        sink.status(&format!(
            "No modifications made to {}. Skipping save.",
            path.display()
        ));
        return FileOutcome {
            path: path.display().to_string(),
            status: ReplaceStatus::Unchanged,
            backup: Some(backup),
            encoding: Some(encoding),
            replaced_tags: Vec::new(),
            error: None,
        };
    }

    let replaced_tags = substitution
        .replaced
        .iter()
        .map(|(tag, _)| tag.clone())
        .collect();

    match io::write_file(path, &substitution.content, encoding, "write target") {
        Ok(()) => {
            sink.status(&format!("Modified content saved to {}", path.display()));
            FileOutcome {
                path: path.display().to_string(),
                status: ReplaceStatus::Modified,
                backup: Some(backup),
                encoding: Some(encoding),
                replaced_tags,
                error: None,
            }
        }
        Err(e) => {
            sink.status(&format!(
                "Unable to write modified content to {}.",
                path.display()
            ));
            FileOutcome {
                path: path.display().to_string(),
                status: ReplaceStatus::Failed,
                backup: Some(backup),
                encoding: Some(encoding),
                replaced_tags,
                error: Some(e.detail_text()),
            }
        }
    }
}
