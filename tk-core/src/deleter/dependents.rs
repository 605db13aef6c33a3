use std::collections::HashSet;

use anyhow::Context;
use tracing::*;

use crate::prelude::*;
use crate::store::Run;

// The apiserver does the coarse filtering by label; the label value is just the task name, so
// it also matches runs of a namespaced Task with the same name, which we drop here.
pub async fn find_dependents<S: ResourceStore + ?Sized>(
    store: &S,
    template_name: &str,
    namespace: &str,
) -> anyhow::Result<Vec<Run>> {
    let selector = format!("{TASK_LABEL_KEY}={template_name}");
    let runs = store
        .list_runs(namespace, &selector)
        .await
        .with_context(|| format!("failed to list {TASK_RUN_RESOURCE}s for {CLUSTER_TASK_RESOURCE} {template_name:?}"))?;

    let (dependents, others): (Vec<_>, Vec<_>) = runs.into_iter().partition(|run| run.is_dependent_of(template_name));
    for run in &others {
        debug!("skipping taskrun {}/{}: not spawned from clustertask {template_name}", run.namespace, run.name);
    }
    Ok(dependents)
}

// Dependents of every template, in the order they were found, without duplicates
pub async fn resolve_dependents<S: ResourceStore + ?Sized>(
    store: &S,
    template_names: &[String],
    namespace: &str,
) -> anyhow::Result<Vec<Run>> {
    let mut seen = HashSet::new();
    let mut dependents = vec![];
    for name in template_names {
        for run in find_dependents(store, name, namespace).await? {
            if seen.insert((run.namespace.clone(), run.name.clone())) {
                dependents.push(run);
            }
        }
    }
    Ok(dependents)
}
