mod kube_store;
mod types;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

pub use self::kube_store::{
    KubeStore,
    SchemaVersion,
    TaskRunExt,
    V1alpha1Schema,
    V1beta1Schema,
    new_store,
};
pub use self::types::{
    Run,
    Template,
    TemplateKind,
    TemplateRef,
};
use crate::errors::*;

// The handful of calls the deleter needs against the cluster.  Errors returned from here are
// treated as opaque; the deleter only ever embeds their message in its own error output, so
// implementations should make sure the message is meaningful on its own.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResourceStore: Send + Sync {
    async fn list_templates(&self) -> anyhow::Result<Vec<Template>>;
    async fn list_runs(&self, namespace: &str, label_selector: &str) -> anyhow::Result<Vec<Run>>;
    async fn delete_template(&self, name: &str) -> EmptyResult;
    async fn delete_run(&self, namespace: &str, name: &str) -> EmptyResult;
}

#[cfg(test)]
mod tests;
