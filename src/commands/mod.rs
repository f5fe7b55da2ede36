pub type CmdResult<T> = tagswap::Result<(T, i32)>;

pub mod replace;
pub mod revert;
pub mod summarize;

/// Dispatch the parsed action to its handler and map the result to JSON.
pub(crate) fn run_json(cli: crate::Cli) -> (tagswap::Result<serde_json::Value>, i32) {
    match cli.action {
        crate::Action::Replace => crate::output::map_cmd_result_to_json(replace::run(
            &cli.config,
            cli.variant.as_deref(),
        )),
        crate::Action::Revert => {
            crate::output::map_cmd_result_to_json(revert::run(&cli.config))
        }
        crate::Action::Summarize => {
            crate::output::map_cmd_result_to_json(summarize::run(&cli.config))
        }
    }
}
