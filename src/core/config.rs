//! Typed access to the substitution configuration.

use crate::core::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A named set of tag replacements.
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    pub name: String,
    /// Tag to value, in document order. Pairs are applied sequentially, so
    /// an earlier replacement can feed a later tag.
    #[serde(default)]
    pub replacements: IndexMap<String, String>,
}

/// Root configuration: the target files and the variants that can be
/// applied to them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Targets are processed in list order. Duplicates are processed
    /// redundantly, not rejected.
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Config {
    /// Load a configuration from a JSON file.
    ///
    /// Absent `files` or `variants` keys deserialize as empty sequences.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::config_not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read config".to_string())))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
    }

    /// Look up a variant by exact name. First match wins when names repeat.
    pub fn variant(&self, name: &str) -> Result<&Variant> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| Error::variant_not_found(name, self.variant_names()))
    }

    pub fn variant_names(&self) -> Vec<String> {
        self.variants.iter().map(|v| v.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "{}", content).unwrap();
        temp
    }

    #[test]
    fn load_parses_files_and_variants() {
        let temp = write_config(
            r#"{
                "files": ["a.txt", "b.conf"],
                "variants": [
                    { "name": "prod", "replacements": { "{{URL}}": "https://api.example.com" } },
                    { "name": "dev", "replacements": { "{{URL}}": "http://localhost:8080" } }
                ]
            }"#,
        );

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.conf")]);
        assert_eq!(config.variant_names(), vec!["prod", "dev"]);
        assert_eq!(
            config.variants[0].replacements["{{URL}}"],
            "https://api.example.com"
        );
    }

    #[test]
    fn absent_keys_default_to_empty() {
        let temp = write_config("{}");
        let config = Config::load(temp.path()).unwrap();
        assert!(config.files.is_empty());
        assert!(config.variants.is_empty());
    }

    #[test]
    fn load_missing_file_is_config_not_found() {
        let err = Config::load(Path::new("/nonexistent/config.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn load_rejects_invalid_json() {
        let temp = write_config("{ not json");
        let err = Config::load(temp.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidJson);
    }

    #[test]
    fn replacements_keep_document_order() {
        let temp = write_config(
            r#"{
                "variants": [
                    { "name": "chain", "replacements": { "Z": "1", "A": "2", "M": "3" } }
                ]
            }"#,
        );

        let config = Config::load(temp.path()).unwrap();
        let keys: Vec<&String> = config.variants[0].replacements.keys().collect();
        assert_eq!(keys, vec!["Z", "A", "M"]);
    }

    #[test]
    fn variant_lookup_is_exact_and_first_match() {
        let temp = write_config(
            r#"{
                "variants": [
                    { "name": "dup", "replacements": { "A": "first" } },
                    { "name": "dup", "replacements": { "A": "second" } }
                ]
            }"#,
        );

        let config = Config::load(temp.path()).unwrap();
        let variant = config.variant("dup").unwrap();
        assert_eq!(variant.replacements["A"], "first");

        let err = config.variant("DUP").unwrap_err();
        assert_eq!(err.code, ErrorCode::VariantNotFound);
        assert_eq!(err.details["available"][0], "dup");
    }
}
