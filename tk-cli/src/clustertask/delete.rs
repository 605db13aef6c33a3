use std::io::{
    self,
    BufRead,
    Write,
};

use tk_core::deleter::{
    Deleter,
    DeletionRequest,
    StreamConfirmation,
};
use tk_core::k8s::discover_api_version;
use tk_core::prelude::*;
use tk_core::store::new_store;
use tracing::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(long_help = "names of the ClusterTasks to delete")]
    pub names: Vec<String>,

    #[arg(short, long, long_help = "delete without asking for confirmation")]
    pub force: bool,

    #[arg(long, long_help = "delete every ClusterTask in the cluster")]
    pub all: bool,

    #[arg(long, long_help = "also delete the TaskRuns spawned from the ClusterTasks")]
    pub trs: bool,

    #[arg(
        short,
        long,
        long_help = "namespace to delete TaskRuns from (defaults to the current kubeconfig namespace)"
    )]
    pub namespace: Option<String>,
}

impl Args {
    pub(super) fn request(&self, default_namespace: &str) -> DeletionRequest {
        DeletionRequest {
            target_names: self.names.clone(),
            all: self.all,
            force: self.force,
            include_dependents: self.trs,
            namespace: Some(self.namespace.clone().unwrap_or_else(|| default_namespace.into())),
        }
    }
}

pub async fn cmd(args: &Args, api_version: Option<ApiVersion>) -> EmptyResult {
    let client = kube::Client::try_default().await?;
    delete(args, client, api_version, io::stdin().lock(), &mut io::stdout()).await
}

pub(super) async fn delete(
    args: &Args,
    client: kube::Client,
    api_version: Option<ApiVersion>,
    input: impl BufRead,
    output: &mut impl Write,
) -> EmptyResult {
    let req = args.request(client.default_namespace());

    // Bad arguments shouldn't need a round-trip to the apiserver to get reported
    req.validate()?;

    let version = match api_version {
        Some(v) => v,
        None => discover_api_version(&client).await?,
    };
    debug!("deleting clustertasks using {GROUP}/{version}");

    let store = new_store(client, version);
    let summary = {
        let mut gate = StreamConfirmation::new(input, &mut *output);
        Deleter::new(store.as_ref()).execute(&req, &mut gate).await?
    };
    write!(output, "{summary}")?;
    output.flush()?;

    Ok(())
}
