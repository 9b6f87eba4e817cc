//! zpool-agent - OCF resource agent for ZFS pools

use std::process::ExitCode;

use clap::Parser;

use zpool_agent::cli::Cli;
use zpool_agent::domain::OcfStatus;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                OcfStatus::BadArguments.into()
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    cli.run().await.into()
}
