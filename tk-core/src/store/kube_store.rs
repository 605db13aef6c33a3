use std::fmt::Debug;
use std::marker::PhantomData;

use async_trait::async_trait;
use kube::api::{
    DeleteParams,
    ListParams,
};
use kube::core::NamespaceResourceScope;
use kube::Resource;
use serde::de::DeserializeOwned;
use tk_api::{
    v1alpha1,
    v1beta1,
};
use tracing::*;

use crate::errors::*;
use crate::k8s::ApiVersion;
use crate::store::{
    ResourceStore,
    Run,
    Template,
    TemplateRef,
};

// Version-specific accessors for the bits of a TaskRun the store hands back to the deleter.  A
// taskRef without a name (bundle or resolver refs) can't point at a ClusterTask.
pub trait TaskRunExt {
    fn template_ref(&self) -> Option<TemplateRef>;
}

impl TaskRunExt for v1alpha1::TaskRun {
    fn template_ref(&self) -> Option<TemplateRef> {
        self.spec
            .task_ref
            .as_ref()
            .and_then(|r| r.name.clone().map(|name| TemplateRef { name, kind: r.kind.into() }))
    }
}

impl TaskRunExt for v1beta1::TaskRun {
    fn template_ref(&self) -> Option<TemplateRef> {
        self.spec
            .task_ref
            .as_ref()
            .and_then(|r| r.name.clone().map(|name| TemplateRef { name, kind: r.kind.into() }))
    }
}

pub trait SchemaVersion: Send + Sync + 'static {
    const VERSION: ApiVersion;

    type Template: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug + Send + Sync + 'static;
    type Run: Resource<DynamicType = (), Scope = NamespaceResourceScope>
        + TaskRunExt
        + Clone
        + DeserializeOwned
        + Debug
        + Send
        + Sync
        + 'static;
}

pub struct V1alpha1Schema;

impl SchemaVersion for V1alpha1Schema {
    const VERSION: ApiVersion = ApiVersion::V1alpha1;

    type Template = v1alpha1::ClusterTask;
    type Run = v1alpha1::TaskRun;
}

pub struct V1beta1Schema;

impl SchemaVersion for V1beta1Schema {
    const VERSION: ApiVersion = ApiVersion::V1beta1;

    type Template = v1beta1::ClusterTask;
    type Run = v1beta1::TaskRun;
}

// A ResourceStore backed by the typed kube API for one schema version.  The deleter doesn't
// care which version it's talking to; `new_store` picks the right one at runtime.
pub struct KubeStore<V> {
    client: kube::Client,
    version: PhantomData<V>,
}

impl<V: SchemaVersion> KubeStore<V> {
    pub fn new(client: kube::Client) -> KubeStore<V> {
        KubeStore { client, version: PhantomData }
    }

    fn template_api(&self) -> kube::Api<V::Template> {
        kube::Api::all(self.client.clone())
    }

    fn run_api(&self, namespace: &str) -> kube::Api<V::Run> {
        kube::Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl<V: SchemaVersion> ResourceStore for KubeStore<V> {
    async fn list_templates(&self) -> anyhow::Result<Vec<Template>> {
        let templates = self.template_api().list(&ListParams::default()).await.map_err(into_store_error)?;
        debug!("listed {} clustertasks ({})", templates.items.len(), V::VERSION);
        Ok(templates.items.iter().map(Template::from_resource).collect())
    }

    async fn list_runs(&self, namespace: &str, label_selector: &str) -> anyhow::Result<Vec<Run>> {
        let lp = ListParams::default().labels(label_selector);
        let runs = self.run_api(namespace).list(&lp).await.map_err(into_store_error)?;
        debug!("listed {} taskruns in {namespace} matching {label_selector} ({})", runs.items.len(), V::VERSION);
        Ok(runs.items.iter().map(Run::from_resource).collect())
    }

    async fn delete_template(&self, name: &str) -> EmptyResult {
        self.template_api()
            .delete(name, &DeleteParams::default())
            .await
            .map_err(into_store_error)?;
        Ok(())
    }

    async fn delete_run(&self, namespace: &str, name: &str) -> EmptyResult {
        self.run_api(namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map_err(into_store_error)?;
        Ok(())
    }
}

pub fn new_store(client: kube::Client, version: ApiVersion) -> Box<dyn ResourceStore> {
    match version {
        ApiVersion::V1alpha1 => Box::new(KubeStore::<V1alpha1Schema>::new(client)),
        ApiVersion::V1beta1 => Box::new(KubeStore::<V1beta1Schema>::new(client)),
    }
}

// The apiserver's status message (e.g. `clustertasks.tekton.dev "foo" not found`) is what
// users expect to see; kube's own Display wraps it with the reason and code.
fn into_store_error(err: kube::Error) -> anyhow::Error {
    match err {
        kube::Error::Api(resp) => anyhow!(resp.message),
        err => err.into(),
    }
}
