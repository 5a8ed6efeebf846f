pub mod charts;
pub mod run;

use crate::cli::args::{Cli, Command};

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const RUN_ERROR: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args, run::DatasetKind::Core).await,
        Command::RunExpanded(args) => run::run(args, run::DatasetKind::Expanded).await,
        Command::Charts(args) => charts::run(args),
    }
}
