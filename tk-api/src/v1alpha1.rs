use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Step,
    TaskKind,
    TaskRunStatus,
};

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskParam {
    pub name: String,
    pub description: Option<String>,
    #[schemars(schema_with = "crate::any_value")]
    pub default: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    pub params: Option<Vec<TaskParam>>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "tekton.dev", version = "v1alpha1", kind = "ClusterTask")]
#[kube(shortname = "ct")]
#[serde(rename_all = "camelCase")]
pub struct ClusterTaskSpec {
    pub inputs: Option<Inputs>,
    pub steps: Option<Vec<Step>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    pub name: Option<String>,
    pub kind: Option<TaskKind>,
    pub api_version: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "tekton.dev", version = "v1alpha1", kind = "TaskRun", namespaced)]
#[kube(shortname = "tr", shortname = "trs")]
#[kube(status = "TaskRunStatus")]
#[serde(rename_all = "camelCase")]
pub struct TaskRunSpec {
    pub task_ref: Option<TaskRef>,
    pub service_account: Option<String>,
    pub timeout: Option<String>,
}
