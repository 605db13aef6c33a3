use super::DeleteError;
use crate::errors::*;
use crate::prelude::*;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeletionRequest {
    pub target_names: Vec<String>,
    pub all: bool,
    pub force: bool,
    pub include_dependents: bool,
    pub namespace: Option<String>,
}

impl DeletionRequest {
    pub fn validate(&self) -> EmptyResult {
        if self.all {
            ensure!(
                self.target_names.is_empty() && !self.include_dependents,
                DeleteError::invalid_arguments(ALL_FLAG_CONFLICT_MSG)
            );
        } else if self.target_names.is_empty() {
            bail!(DeleteError::invalid_arguments(MISSING_NAMES_MSG));
        }

        if self.include_dependents && self.namespace.as_deref().is_none_or(str::is_empty) {
            bail!(DeleteError::invalid_arguments(MISSING_NAMESPACE_MSG));
        }
        Ok(())
    }

    // Only set when dependents should be deleted; bulk deletes never touch TaskRuns
    pub fn dependents_namespace(&self) -> Option<&str> {
        if self.include_dependents && !self.all {
            self.namespace.as_deref()
        } else {
            None
        }
    }
}
