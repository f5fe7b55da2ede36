use std::path::Path;

use tagswap::{revert, Config, RevertOutput, TtyStatus};

use super::CmdResult;

pub fn run(config_path: &Path) -> CmdResult<RevertOutput> {
    let config = Config::load(config_path)?;

    let mut sink = TtyStatus;
    let output = revert::run(&config.files, &mut sink);

    let exit_code = if output.summary.failed > 0 { 1 } else { 0 };
    Ok((output, exit_code))
}
