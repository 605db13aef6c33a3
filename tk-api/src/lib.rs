pub mod v1alpha1;
pub mod v1beta1;

use clockabilly::{
    DateTime,
    Utc,
};
use schemars::{
    JsonSchema,
    Schema,
    SchemaGenerator,
    json_schema,
};
use serde::{
    Deserialize,
    Serialize,
};

pub const GROUP: &str = "tekton.dev";

// The pipeline controller stamps every TaskRun with the name of the task it was spawned from
pub const TASK_LABEL_KEY: &str = "tekton.dev/task";

// The `kind` field of a TaskRun's taskRef; the pipeline controller treats a missing kind as a
// namespaced Task, so we do the same.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, JsonSchema, PartialEq, Serialize)]
pub enum TaskKind {
    #[default]
    Task,
    ClusterTask,
}

// Steps may inherit their image from the task's `stepTemplate`
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub name: Option<String>,
    pub image: Option<String>,
    pub command: Option<Vec<String>>,
    pub args: Option<Vec<String>>,
    pub script: Option<String>,
}

// Param values and defaults can be a string, an array of strings, or an object; we never look
// inside them, so they are kept as raw JSON.
pub fn any_value(_: &mut SchemaGenerator) -> Schema {
    json_schema!({"x-kubernetes-preserve-unknown-fields": true})
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub last_transition_time: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunStatus {
    pub conditions: Option<Vec<Condition>>,
    pub pod_name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub completion_time: Option<DateTime<Utc>>,
}
