//! Text encoding detection seam.
//!
//! Target files are read and written through the encoding a detector
//! reports for them. The default detector always reports UTF-8 — the only
//! encoding currently implemented — but the capability boundary lets a
//! real detector be substituted without touching the replace flow.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// A named text encoding, as reported by an [`EncodingDetector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Encoding(&'static str);

impl Encoding {
    pub const UTF8: Encoding = Encoding("UTF-8");

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Capability for detecting the encoding of a file before it is read.
pub trait EncodingDetector {
    fn detect(&self, path: &Path) -> Encoding;
}

/// Fixed detector reporting UTF-8 for every file.
#[derive(Debug, Default)]
pub struct Utf8Detector;

impl EncodingDetector for Utf8Detector {
    fn detect(&self, _path: &Path) -> Encoding {
        Encoding::UTF8
    }
}
