use kube::CustomResourceExt;
use kube::core::crd::merge_crds;
use tk_core::prelude::*;

// Both schema versions live in one CRD per kind; v1beta1 is the storage version
pub fn cmd() -> EmptyResult {
    let storage_version = ApiVersion::V1beta1.as_str();
    let cluster_tasks = merge_crds(vec![v1alpha1::ClusterTask::crd(), v1beta1::ClusterTask::crd()], storage_version)?;
    let task_runs = merge_crds(vec![v1alpha1::TaskRun::crd(), v1beta1::TaskRun::crd()], storage_version)?;

    print!("---\n{}", serde_yaml::to_string(&cluster_tasks)?);
    print!("---\n{}", serde_yaml::to_string(&task_runs)?);

    Ok(())
}
