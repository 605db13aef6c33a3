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
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub description: Option<String>,
    #[schemars(schema_with = "crate::any_value")]
    pub default: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDeclaration {
    pub name: String,
    pub description: Option<String>,
    pub mount_path: Option<String>,
    pub read_only: Option<bool>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "tekton.dev", version = "v1beta1", kind = "ClusterTask")]
#[kube(shortname = "ct")]
#[kube(
    printcolumn = r#"{"name":"age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterTaskSpec {
    pub description: Option<String>,
    pub params: Option<Vec<ParamSpec>>,
    pub steps: Option<Vec<Step>>,
    pub workspaces: Option<Vec<WorkspaceDeclaration>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    pub name: String,
    #[schemars(schema_with = "crate::any_value")]
    pub value: serde_json::Value,
}

// v1beta1 taskRefs may also point at an OCI bundle or a remote resolver instead of an
// in-cluster object, in which case there is no name
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    pub name: Option<String>,
    pub kind: Option<TaskKind>,
    pub api_version: Option<String>,
    pub bundle: Option<String>,
    pub resolver: Option<String>,
    pub params: Option<Vec<Param>>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "tekton.dev", version = "v1beta1", kind = "TaskRun", namespaced)]
#[kube(shortname = "tr", shortname = "trs")]
#[kube(status = "TaskRunStatus")]
#[kube(
    printcolumn = r#"{"name":"succeeded", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Succeeded\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunSpec {
    pub task_ref: Option<TaskRef>,
    pub params: Option<Vec<Param>>,
    pub service_account_name: Option<String>,
    pub timeout: Option<String>,
}
