mod delete;

use clap::Subcommand;
use tk_core::prelude::*;

#[derive(Subcommand)]
pub enum ClusterTaskSubcommand {
    #[command(
        about = "delete ClusterTasks, and optionally the TaskRuns spawned from them",
        visible_aliases = &["d", "del", "rm"],
    )]
    Delete(delete::Args),
}

pub async fn cmd(subcommand: &ClusterTaskSubcommand, api_version: Option<ApiVersion>) -> EmptyResult {
    match subcommand {
        ClusterTaskSubcommand::Delete(args) => delete::cmd(args, api_version).await,
    }
}

#[cfg(test)]
mod tests;
