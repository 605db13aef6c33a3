//! Deleting ClusterTasks, and optionally the TaskRuns spawned from them.
//!
//! A delete goes through four phases: the request is validated, the user is asked to confirm
//! (unless `force` is set), the set of objects to delete is resolved, and then each object is
//! deleted on its own.  Individual delete failures don't stop the remaining deletes; they are
//! collected and reported together once everything has been attempted.  TaskRuns are always
//! deleted before the ClusterTasks they were spawned from.
mod confirm;
mod dependents;
mod outcome;
mod request;

use tracing::*;

pub use self::confirm::{
    ConfirmationGate,
    StreamConfirmation,
    cancel_message_for,
    is_affirmative,
    prompt_for,
};
pub use self::dependents::{
    find_dependents,
    resolve_dependents,
};
pub use self::outcome::{
    DeleteFailure,
    DeleteFailures,
    DeletionOutcome,
    quoted_list,
};
pub use self::request::DeletionRequest;
use crate::errors::*;
use crate::prelude::*;
use crate::store::Run;

err_impl! {DeleteError,
    #[error("{0}")]
    InvalidArguments(String),

    #[error("{0}")]
    Canceled(String),

    #[error("{0}")]
    DeletionFailed(DeleteFailures),
}

pub struct Deleter<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: ResourceStore + ?Sized> Deleter<'a, S> {
    pub fn new(store: &'a S) -> Deleter<'a, S> {
        Deleter { store }
    }

    // Returns the text to show the user on success; on failure the error message is the
    // complete user-facing report.  Partial successes are not reported if anything failed.
    pub async fn execute<G: ConfirmationGate>(&self, req: &DeletionRequest, gate: &mut G) -> anyhow::Result<String> {
        req.validate()?;

        if !req.force && !gate.confirm(&prompt_for(req))? {
            bail!(DeleteError::canceled(&cancel_message_for(req)));
        }

        let outcome = if req.all {
            self.delete_all().await?
        } else {
            self.delete_named(req).await?
        };
        outcome.into_result()
    }

    async fn delete_all(&self) -> anyhow::Result<DeletionOutcome> {
        let templates = self.store.list_templates().await?;
        info!("deleting all {} clustertasks", templates.len());

        let mut outcome = DeletionOutcome::for_all();
        for template in &templates {
            self.delete_template(&template.name, &mut outcome).await;
        }
        Ok(outcome)
    }

    async fn delete_named(&self, req: &DeletionRequest) -> anyhow::Result<DeletionOutcome> {
        let mut outcome = DeletionOutcome::default();

        if let Some(ns) = req.dependents_namespace() {
            let dependents = resolve_dependents(self.store, &req.target_names, ns).await?;
            if dependents.is_empty() {
                debug!("no taskruns in {ns} belong to {:?}", req.target_names);
            }
            for run in &dependents {
                self.delete_run(run, &mut outcome).await;
            }
        }

        for name in &req.target_names {
            self.delete_template(name, &mut outcome).await;
        }
        Ok(outcome)
    }

    async fn delete_template(&self, name: &str, outcome: &mut DeletionOutcome) {
        debug!("deleting clustertask {name}");
        match self.store.delete_template(name).await {
            Ok(()) => outcome.deleted_primary.push(name.into()),
            Err(err) => {
                warn!("could not delete clustertask {name}: {err:#}");
                outcome.failures.push(DeleteFailure::new(CLUSTER_TASK_RESOURCE, name, &err));
            },
        }
    }

    async fn delete_run(&self, run: &Run, outcome: &mut DeletionOutcome) {
        debug!("deleting taskrun {}/{}", run.namespace, run.name);
        match self.store.delete_run(&run.namespace, &run.name).await {
            Ok(()) => outcome.deleted_dependents.push(run.name.clone()),
            Err(err) => {
                warn!("could not delete taskrun {}/{}: {err:#}", run.namespace, run.name);
                outcome.failures.push(DeleteFailure::new(TASK_RUN_RESOURCE, &run.name, &err));
            },
        }
    }
}

#[cfg(test)]
mod tests;
