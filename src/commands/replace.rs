use std::path::Path;

use tagswap::{replace, Config, ReplaceOutput, TtyStatus, Utf8Detector};

use super::CmdResult;

pub fn run(config_path: &Path, variant_name: Option<&str>) -> CmdResult<ReplaceOutput> {
    let name = variant_name.ok_or_else(|| {
        tagswap::Error::validation_missing_argument(vec!["variant".to_string()])
            .with_hint("Usage: tagswap <config> replace <variant>")
    })?;

    let config = Config::load(config_path)?;
    let variant = config.variant(name)?;

    let mut sink = TtyStatus;
    let output = replace::run(&config.files, variant, &Utf8Detector, &mut sink);

    let exit_code = if output.summary.failed > 0 { 1 } else { 0 };
    Ok((output, exit_code))
}
