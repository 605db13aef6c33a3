use clockabilly::DateTime;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use rstest::*;
use serde_json::json;
use tk_api::{
    TASK_LABEL_KEY,
    TaskKind,
    v1alpha1,
    v1beta1,
};

use crate::constants::*;

fn test_meta(name: &str, ns: Option<&str>, task_name: Option<&str>) -> metav1::ObjectMeta {
    metav1::ObjectMeta {
        name: Some(name.into()),
        namespace: ns.map(Into::into),
        labels: task_name.map(|t| [(TASK_LABEL_KEY.to_string(), t.to_string())].into()),
        creation_timestamp: DateTime::from_timestamp(TEST_NOW - 60, 0).map(metav1::Time),
        ..Default::default()
    }
}

#[fixture]
pub fn test_cluster_task(#[default(TEST_CLUSTER_TASK)] name: &str) -> v1beta1::ClusterTask {
    v1beta1::ClusterTask {
        metadata: test_meta(name, None, None),
        spec: v1beta1::ClusterTaskSpec {
            description: Some("chop the tomatoes".into()),
            steps: Some(vec![tk_api::Step {
                name: Some("chop".into()),
                image: Some("busybox".into()),
                script: Some("echo chop".into()),
                ..Default::default()
            }]),
            ..Default::default()
        },
    }
}

#[fixture]
pub fn test_cluster_task_v1alpha1(#[default(TEST_CLUSTER_TASK)] name: &str) -> v1alpha1::ClusterTask {
    v1alpha1::ClusterTask {
        metadata: test_meta(name, None, None),
        spec: v1alpha1::ClusterTaskSpec {
            steps: Some(vec![tk_api::Step {
                name: Some("chop".into()),
                image: Some("busybox".into()),
                ..Default::default()
            }]),
            ..Default::default()
        },
    }
}

pub fn test_task_run(name: &str, task_name: &str, kind: TaskKind) -> v1beta1::TaskRun {
    v1beta1::TaskRun {
        metadata: test_meta(name, Some(TEST_NAMESPACE), Some(task_name)),
        spec: v1beta1::TaskRunSpec {
            task_ref: Some(v1beta1::TaskRef {
                name: Some(task_name.into()),
                kind: Some(kind),
                ..Default::default()
            }),
            ..Default::default()
        },
        status: None,
    }
}

pub fn test_task_run_v1alpha1(name: &str, task_name: &str, kind: TaskKind) -> v1alpha1::TaskRun {
    v1alpha1::TaskRun {
        metadata: test_meta(name, Some(TEST_NAMESPACE), Some(task_name)),
        spec: v1alpha1::TaskRunSpec {
            task_ref: Some(v1alpha1::TaskRef {
                name: Some(task_name.into()),
                kind: Some(kind),
                ..Default::default()
            }),
            ..Default::default()
        },
        status: None,
    }
}

// Two runs of the `tomatoes` ClusterTask, plus a run of a namespaced Task that happens to
// share its name (and therefore its task label)
#[fixture]
pub fn test_task_runs() -> Vec<v1beta1::TaskRun> {
    vec![
        test_task_run(TEST_TASK_RUN_1, TEST_CLUSTER_TASK, TaskKind::ClusterTask),
        test_task_run(TEST_TASK_RUN_2, TEST_CLUSTER_TASK, TaskKind::ClusterTask),
        test_task_run(TEST_TASK_RUN_DECOY, TEST_CLUSTER_TASK, TaskKind::Task),
    ]
}

#[fixture]
pub fn test_task_runs_v1alpha1() -> Vec<v1alpha1::TaskRun> {
    vec![
        test_task_run_v1alpha1(TEST_TASK_RUN_1, TEST_CLUSTER_TASK, TaskKind::ClusterTask),
        test_task_run_v1alpha1(TEST_TASK_RUN_2, TEST_CLUSTER_TASK, TaskKind::ClusterTask),
        test_task_run_v1alpha1(TEST_TASK_RUN_DECOY, TEST_CLUSTER_TASK, TaskKind::Task),
    ]
}

// The fixtures below are raw objects shaped the way a real cluster hands them back, with fields
// the typed fixtures above never fill in.

fn task_run_json(name: &str, task_ref: serde_json::Value, params: serde_json::Value) -> serde_json::Value {
    json!({
        "apiVersion": "tekton.dev/v1beta1",
        "kind": "TaskRun",
        "metadata": {
            "name": name,
            "namespace": TEST_NAMESPACE,
            "labels": {TASK_LABEL_KEY: TEST_CLUSTER_TASK, "app.kubernetes.io/managed-by": "tekton-pipelines"},
        },
        "spec": {
            "taskRef": task_ref,
            "params": params,
            "serviceAccountName": "default",
        },
        "status": {
            "podName": format!("{name}-pod"),
            "conditions": [{"type": "Succeeded", "status": "True", "reason": "Succeeded"}],
        },
    })
}

// Two runs of `tomatoes` with array and object params, and a run that resolved its task through
// the cluster resolver (no name or kind on its taskRef) but still carries the task label
#[fixture]
pub fn test_task_runs_json() -> Vec<serde_json::Value> {
    vec![
        task_run_json(
            TEST_TASK_RUN_1,
            json!({"name": TEST_CLUSTER_TASK, "kind": "ClusterTask"}),
            json!([
                {"name": "files", "value": ["a.txt", "b.txt"]},
                {"name": "options", "value": {"size": "small", "ripe": "true"}},
            ]),
        ),
        task_run_json(
            TEST_TASK_RUN_2,
            json!({"name": TEST_CLUSTER_TASK, "kind": "ClusterTask"}),
            json!([{"name": "color", "value": "red"}]),
        ),
        task_run_json(
            TEST_TASK_RUN_RESOLVER,
            json!({
                "resolver": "cluster",
                "params": [
                    {"name": "kind", "value": "task"},
                    {"name": "name", "value": TEST_CLUSTER_TASK},
                    {"name": "namespace", "value": TEST_NAMESPACE},
                ],
            }),
            json!([]),
        ),
    ]
}

// A ClusterTask whose steps take their image from `stepTemplate`, with an array param default
#[fixture]
pub fn test_cluster_task_json(#[default(TEST_CLUSTER_TASK)] name: &str) -> serde_json::Value {
    json!({
        "apiVersion": "tekton.dev/v1beta1",
        "kind": "ClusterTask",
        "metadata": {"name": name, "creationTimestamp": "2023-11-14T22:12:20Z"},
        "spec": {
            "params": [{"name": "files", "type": "array", "default": ["a.txt"]}],
            "stepTemplate": {"image": "busybox", "env": [{"name": "HOME", "value": "/tekton/home"}]},
            "steps": [
                {"name": "chop", "script": "echo chop"},
                {"name": "slice", "command": ["echo"], "args": ["$(params.files[*])"]},
            ],
        },
    })
}
