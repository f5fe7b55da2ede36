// Public modules
pub mod backup;
pub mod config;
pub mod encoding;
pub mod error;
pub mod output;
pub mod replace;
pub mod revert;
pub mod status;
pub mod summary;

// Re-export common types for convenience
pub use config::{Config, Variant};
pub use encoding::{Encoding, EncodingDetector, Utf8Detector};
pub use error::{Error, ErrorCode, Result};
pub use output::{
    BackupStatus, FileOutcome, ReplaceOutput, ReplaceStatus, RestoreOutcome, RevertOutput,
    RevertStatus, RevertSummary, RunSummary, SummarizeOutput, VariantSummary,
};
pub use status::{BufferStatus, StatusSink, TtyStatus};
