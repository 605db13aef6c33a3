use std::collections::BTreeMap;

use super::*;
use crate::prelude::*;

fn run_with(label: Option<&str>, template_ref: Option<(&str, TemplateKind)>) -> Run {
    Run {
        name: TEST_TASK_RUN_1.into(),
        namespace: TEST_NAMESPACE.into(),
        labels: label.map_or(BTreeMap::new(), |l| [(TASK_LABEL_KEY.to_string(), l.to_string())].into()),
        template_ref: template_ref.map(|(name, kind)| TemplateRef { name: name.into(), kind }),
    }
}

#[rstest]
#[case::cluster_task(Some(TEST_CLUSTER_TASK), Some((TEST_CLUSTER_TASK, TemplateKind::ClusterScoped)), true)]
#[case::namespaced_task(Some(TEST_CLUSTER_TASK), Some((TEST_CLUSTER_TASK, TemplateKind::NamespaceScoped)), false)]
#[case::other_ref(Some(TEST_CLUSTER_TASK), Some(("potatoes", TemplateKind::ClusterScoped)), false)]
#[case::other_label(Some("potatoes"), Some((TEST_CLUSTER_TASK, TemplateKind::ClusterScoped)), false)]
#[case::no_label(None, Some((TEST_CLUSTER_TASK, TemplateKind::ClusterScoped)), false)]
#[case::no_ref(Some(TEST_CLUSTER_TASK), None, false)]
fn test_is_dependent_of(
    #[case] label: Option<&str>,
    #[case] template_ref: Option<(&str, TemplateKind)>,
    #[case] expected: bool,
) {
    assert_eq!(run_with(label, template_ref).is_dependent_of(TEST_CLUSTER_TASK), expected);
}

#[rstest]
#[case::cluster_task(Some(TaskKind::ClusterTask), TemplateKind::ClusterScoped)]
#[case::task(Some(TaskKind::Task), TemplateKind::NamespaceScoped)]
#[case::missing(None, TemplateKind::NamespaceScoped)]
fn test_template_kind_from_task_kind(#[case] kind: Option<TaskKind>, #[case] expected: TemplateKind) {
    assert_eq!(TemplateKind::from(kind), expected);
}

#[rstest]
fn test_run_from_resource(test_task_runs: Vec<v1beta1::TaskRun>) {
    let run = Run::from_resource(&test_task_runs[2]);
    assert_eq!(run, Run {
        name: TEST_TASK_RUN_DECOY.into(),
        namespace: TEST_NAMESPACE.into(),
        labels: [(TASK_LABEL_KEY.to_string(), TEST_CLUSTER_TASK.to_string())].into(),
        template_ref: Some(TemplateRef {
            name: TEST_CLUSTER_TASK.into(),
            kind: TemplateKind::NamespaceScoped,
        }),
    });
}

#[rstest]
fn test_template_from_resource(test_cluster_task: v1beta1::ClusterTask) {
    let template = Template::from_resource(&test_cluster_task);
    assert_eq!(template.name, TEST_CLUSTER_TASK);
    assert_eq!(template.creation_timestamp.map(|ts| ts.timestamp()), Some(TEST_NOW - 60));
}
