//! The summarize flow: report configuration contents.

use crate::core::config::Config;
use crate::core::output::{SummarizeOutput, VariantSummary};
use crate::core::status::StatusSink;

/// Report the configured file list and every variant's replacement table.
///
/// Read-only: nothing on the filesystem is touched.
pub fn run(config: &Config, sink: &mut dyn StatusSink) -> SummarizeOutput {
    if !config.files.is_empty() {
        sink.status("Files to be modified:");
        for file in &config.files {
            sink.status(&format!("- {}", file.display()));
        }
    }

    if !config.variants.is_empty() {
        sink.status("Variants in the config:");
        for variant in &config.variants {
            sink.status(&format!("- Name: {}", variant.name));
            sink.status("  Replacements:");
            for (tag, value) in &variant.replacements {
                sink.status(&format!("  - {}: {}", tag, value));
            }
        }
    }

    SummarizeOutput {
        files: config
            .files
            .iter()
            .map(|f| f.display().to_string())
            .collect(),
        variants: config
            .variants
            .iter()
            .map(|v| VariantSummary {
                name: v.name.clone(),
                replacements: v.replacements.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Variant;
    use crate::core::status::BufferStatus;
    use indexmap::IndexMap;
    use std::path::PathBuf;

    fn sample_config() -> Config {
        let mut replacements = IndexMap::new();
        replacements.insert("{{URL}}".to_string(), "https://api.example.com".to_string());
        replacements.insert("{{PORT}}".to_string(), "443".to_string());

        Config {
            files: vec![PathBuf::from("a.txt"), PathBuf::from("b.conf")],
            variants: vec![Variant {
                name: "prod".to_string(),
                replacements,
            }],
        }
    }

    #[test]
    fn output_mirrors_the_configuration() {
        let config = sample_config();
        let mut sink = BufferStatus::new();

        let output = run(&config, &mut sink);

        assert_eq!(output.files, vec!["a.txt", "b.conf"]);
        assert_eq!(output.variants.len(), 1);
        assert_eq!(output.variants[0].name, "prod");
        assert_eq!(
            output.variants[0].replacements["{{URL}}"],
            "https://api.example.com"
        );
    }

    #[test]
    fn listing_covers_files_and_variant_tables() {
        let config = sample_config();
        let mut sink = BufferStatus::new();

        run(&config, &mut sink);

        assert_eq!(
            sink.messages(),
            [
                "Files to be modified:",
                "- a.txt",
                "- b.conf",
                "Variants in the config:",
                "- Name: prod",
                "  Replacements:",
                "  - {{URL}}: https://api.example.com",
                "  - {{PORT}}: 443",
            ]
        );
    }

    #[test]
    fn empty_config_produces_no_listing() {
        let config = Config::default();
        let mut sink = BufferStatus::new();

        let output = run(&config, &mut sink);

        assert!(output.files.is_empty());
        assert!(output.variants.is_empty());
        assert!(sink.messages().is_empty());
    }
}
