use const_format::formatcp;
pub use tk_api::{
    GROUP,
    TASK_LABEL_KEY,
};

// Resource names as they appear in prompts and errors
pub const CLUSTER_TASK_RESOURCE: &str = "clustertask";
pub const TASK_RUN_RESOURCE: &str = "taskrun";

// Kinds as they appear in summaries
pub const CLUSTER_TASK_KIND_PLURAL: &str = "ClusterTasks";
pub const TASK_RUN_KIND_PLURAL: &str = "TaskRuns";

// Validation messages
pub const ALL_FLAG_CONFLICT_MSG: &str = "--all flag should not have any arguments or flags specified with it";
pub const MISSING_NAMES_MSG: &str =
    formatcp!("must provide {CLUSTER_TASK_RESOURCE} name(s) or use --all flag with delete");
pub const MISSING_NAMESPACE_MSG: &str = formatcp!("must provide a namespace to delete {TASK_RUN_RESOURCE}s with --trs");

// Confirmation answers (compared case-insensitively)
pub const CONFIRM_ANSWERS: [&str; 2] = ["y", "yes"];
