use std::collections::BTreeMap;

use clockabilly::{
    DateTime,
    Utc,
};
use kube::{
    Resource,
    ResourceExt,
};
use tk_api::TaskKind;

use crate::prelude::*;
use crate::store::TaskRunExt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
    pub name: String,
    pub creation_timestamp: Option<DateTime<Utc>>,
}

impl Template {
    pub fn from_resource<K: Resource>(obj: &K) -> Template {
        Template {
            name: obj.name_any(),
            creation_timestamp: obj.meta().creation_timestamp.as_ref().map(|ts| ts.0),
        }
    }
}

// Which of the two same-named kinds a run was spawned from
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TemplateKind {
    ClusterScoped,
    NamespaceScoped,
}

impl From<Option<TaskKind>> for TemplateKind {
    fn from(kind: Option<TaskKind>) -> TemplateKind {
        match kind {
            Some(TaskKind::ClusterTask) => TemplateKind::ClusterScoped,
            Some(TaskKind::Task) | None => TemplateKind::NamespaceScoped,
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TemplateRef {
    pub name: String,
    pub kind: TemplateKind,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Run {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
    pub template_ref: Option<TemplateRef>,
}

impl Run {
    pub fn from_resource<K: Resource + TaskRunExt>(obj: &K) -> Run {
        Run {
            name: obj.name_any(),
            namespace: obj.namespace().unwrap_or_default(),
            labels: obj.labels().clone(),
            template_ref: obj.template_ref(),
        }
    }

    // The task label is shared between ClusterTasks and namespaced Tasks, so a run only
    // belongs to a ClusterTask if its taskRef says so as well.
    pub fn is_dependent_of(&self, template_name: &str) -> bool {
        let label_matches = self.labels.get(TASK_LABEL_KEY).is_some_and(|v| v == template_name);
        let ref_matches = self
            .template_ref
            .as_ref()
            .is_some_and(|r| r.name == template_name && r.kind == TemplateKind::ClusterScoped);
        label_matches && ref_matches
    }
}
