mod outcome_test;

use mockall::predicate;
use rstest::*;
use tk_testutils::*;

use super::*;
use crate::store::{
    MockResourceStore,
    Run,
    Template,
    TemplateKind,
    TemplateRef,
};

fn test_run(name: &str, template_name: &str, kind: TemplateKind) -> Run {
    Run {
        name: name.into(),
        namespace: TEST_NAMESPACE.into(),
        labels: [(TASK_LABEL_KEY.to_string(), template_name.to_string())].into(),
        template_ref: Some(TemplateRef { name: template_name.into(), kind }),
    }
}

fn test_template(name: &str) -> Template {
    Template { name: name.into(), creation_timestamp: None }
}

#[fixture]
fn runs() -> Vec<Run> {
    vec![
        test_run(TEST_TASK_RUN_1, TEST_CLUSTER_TASK, TemplateKind::ClusterScoped),
        test_run(TEST_TASK_RUN_2, TEST_CLUSTER_TASK, TemplateKind::ClusterScoped),
        test_run(TEST_TASK_RUN_DECOY, TEST_CLUSTER_TASK, TemplateKind::NamespaceScoped),
    ]
}

fn request(names: &[&str]) -> DeletionRequest {
    DeletionRequest {
        target_names: names.iter().map(|n| n.to_string()).collect(),
        ..Default::default()
    }
}
