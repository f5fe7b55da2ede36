use std::path::Path;

use tagswap::{summary, Config, SummarizeOutput, TtyStatus};

use super::CmdResult;

pub fn run(config_path: &Path) -> CmdResult<SummarizeOutput> {
    let config = Config::load(config_path)?;

    let mut sink = TtyStatus;
    Ok((summary::run(&config, &mut sink), 0))
}
