pub const TEST_NAMESPACE: &str = "ns";
pub const TEST_CLUSTER_TASK: &str = "tomatoes";
pub const TEST_CLUSTER_TASK_2: &str = "tomatoes2";
pub const TEST_CLUSTER_TASK_3: &str = "tomatoes3";
pub const TEST_TASK_RUN_1: &str = "task-run-1";
pub const TEST_TASK_RUN_2: &str = "task-run-2";
pub const TEST_TASK_RUN_DECOY: &str = "task-run-3";
pub const TEST_TASK_RUN_RESOLVER: &str = "task-run-4";
pub const TEST_MISSING_NAME: &str = "nonexistent";
pub const TEST_MISSING_NAME_2: &str = "nonexistent2";

// All fixture objects are created one minute before this timestamp
pub const TEST_NOW: i64 = 1_700_000_000;
