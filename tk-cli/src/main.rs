#![cfg_attr(coverage, feature(coverage_attribute))]
mod clustertask;
mod crd;

use clap::{
    Parser,
    Subcommand,
    crate_version,
};
use tk_core::logging;
use tk_core::prelude::*;

use crate::clustertask::ClusterTaskSubcommand;

#[derive(Parser)]
#[command(about = "command-line app for managing tekton ClusterTasks", version, propagate_version = true)]
struct TkCommandRoot {
    #[command(subcommand)]
    subcommand: TkSubcommand,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,

    #[arg(
        long,
        global = true,
        long_help = "tekton.dev API version to use (v1alpha1 or v1beta1); discovered from the cluster if unset"
    )]
    api_version: Option<ApiVersion>,
}

#[derive(Subcommand)]
enum TkSubcommand {
    #[command(subcommand, about = "manage ClusterTasks", visible_alias = "ct")]
    Clustertask(ClusterTaskSubcommand),

    #[command(about = "print the ClusterTask and TaskRun CRDs")]
    Crd,

    #[command(about = "tkctl version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = TkCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        TkSubcommand::Clustertask(subcommand) => clustertask::cmd(subcommand, args.api_version).await,
        TkSubcommand::Crd => crd::cmd(),
        TkSubcommand::Version => {
            println!("tkctl {}", crate_version!());
            Ok(())
        },
    }
}
