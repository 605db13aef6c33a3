use std::fmt;

use super::DeleteError;
use crate::errors::*;
use crate::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeleteFailure {
    pub resource: &'static str,
    pub name: String,
    pub message: String,
}

impl DeleteFailure {
    pub fn new(resource: &'static str, name: &str, err: &anyhow::Error) -> DeleteFailure {
        DeleteFailure {
            resource,
            name: name.into(),
            message: format!("{err:#}"),
        }
    }
}

impl fmt::Display for DeleteFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to delete {} {:?}: {}", self.resource, self.name, self.message)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeleteFailures(Vec<DeleteFailure>);

impl DeleteFailures {
    pub fn push(&mut self, failure: DeleteFailure) {
        self.0.push(failure);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeleteFailure> {
        self.0.iter()
    }
}

impl fmt::Display for DeleteFailures {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msgs: Vec<_> = self.0.iter().map(|failure| failure.to_string()).collect();
        write!(f, "{}", msgs.join("; "))
    }
}

#[derive(Debug, Default)]
pub struct DeletionOutcome {
    pub deleted_primary: Vec<String>,
    pub deleted_dependents: Vec<String>,
    pub failures: DeleteFailures,
    pub(super) all: bool,
}

impl DeletionOutcome {
    pub fn for_all() -> DeletionOutcome {
        DeletionOutcome { all: true, ..Default::default() }
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();
        if !self.deleted_dependents.is_empty() {
            summary += &format!("{TASK_RUN_KIND_PLURAL} deleted: {}\n", quoted_list(&self.deleted_dependents));
        }

        if self.all {
            summary += &format!("All {CLUSTER_TASK_KIND_PLURAL} deleted\n");
        } else if !self.deleted_primary.is_empty() {
            summary += &format!("{CLUSTER_TASK_KIND_PLURAL} deleted: {}\n", quoted_list(&self.deleted_primary));
        }
        summary
    }

    // TODO: successful deletes are dropped on the floor when anything else failed; consider
    // reporting them alongside the failures once callers stop matching on the error text.
    pub fn into_result(self) -> anyhow::Result<String> {
        if !self.failures.is_empty() {
            bail!(DeleteError::deletion_failed(&self.failures));
        }
        Ok(self.summary())
    }
}

pub fn quoted_list(names: &[String]) -> String {
    let quoted: Vec<_> = names.iter().map(|name| format!("{name:?}")).collect();
    quoted.join(", ")
}
