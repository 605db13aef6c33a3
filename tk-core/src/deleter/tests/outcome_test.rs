use super::*;

fn failure(resource: &'static str, name: &str, msg: &str) -> DeleteFailure {
    DeleteFailure::new(resource, name, &anyhow!("{msg}"))
}

#[rstest]
fn test_summary_primary_only() {
    let outcome = DeletionOutcome {
        deleted_primary: vec![TEST_CLUSTER_TASK_2.into(), TEST_CLUSTER_TASK_3.into()],
        ..Default::default()
    };
    assert_eq!(outcome.into_result().unwrap(), "ClusterTasks deleted: \"tomatoes2\", \"tomatoes3\"\n");
}

#[rstest]
fn test_summary_dependents_first() {
    let outcome = DeletionOutcome {
        deleted_primary: vec![TEST_CLUSTER_TASK.into()],
        deleted_dependents: vec![TEST_TASK_RUN_1.into(), TEST_TASK_RUN_2.into()],
        ..Default::default()
    };
    assert_eq!(
        outcome.summary(),
        "TaskRuns deleted: \"task-run-1\", \"task-run-2\"\nClusterTasks deleted: \"tomatoes\"\n"
    );
}

#[rstest]
fn test_summary_all() {
    let mut outcome = DeletionOutcome::for_all();
    outcome.deleted_primary.push(TEST_CLUSTER_TASK.into());
    assert_eq!(outcome.summary(), "All ClusterTasks deleted\n");

    assert_eq!(DeletionOutcome::for_all().summary(), "All ClusterTasks deleted\n");
}

#[rstest]
fn test_failures_take_precedence() {
    let mut outcome = DeletionOutcome {
        deleted_primary: vec![TEST_CLUSTER_TASK.into()],
        deleted_dependents: vec![TEST_TASK_RUN_1.into()],
        ..Default::default()
    };
    outcome.failures.push(failure(TASK_RUN_RESOURCE, TEST_TASK_RUN_2, "boom"));
    outcome.failures.push(failure(CLUSTER_TASK_RESOURCE, TEST_MISSING_NAME, "gone"));

    let err = outcome.into_result().unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to delete taskrun \"task-run-2\": boom; failed to delete clustertask \"nonexistent\": gone"
    );
    let Some(DeleteError::DeletionFailed(failures)) = err.downcast_ref::<DeleteError>() else {
        panic!("expected a DeletionFailed error, got {err:?}");
    };
    let names: Vec<_> = failures.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec![TEST_TASK_RUN_2, TEST_MISSING_NAME]);
}

#[rstest]
fn test_failure_message_includes_context() {
    let err = anyhow!("connection refused").context("error trying to connect");
    let f = DeleteFailure::new(CLUSTER_TASK_RESOURCE, TEST_CLUSTER_TASK, &err);
    assert_eq!(
        f.to_string(),
        "failed to delete clustertask \"tomatoes\": error trying to connect: connection refused"
    );
}
