use std::fmt;
use std::str::FromStr;

use tracing::*;

use crate::errors::*;
use crate::k8s::KubernetesError;
use crate::prelude::*;

// The two schema generations of the tekton.dev API that we know how to talk to, listed in
// order of preference.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApiVersion {
    V1beta1,
    V1alpha1,
}

impl ApiVersion {
    pub const PREFERRED: [ApiVersion; 2] = [ApiVersion::V1beta1, ApiVersion::V1alpha1];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1alpha1 => "v1alpha1",
            ApiVersion::V1beta1 => "v1beta1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<ApiVersion> {
        ApiVersion::PREFERRED
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| KubernetesError::unknown_api_version(s))
    }
}

pub fn select_api_version(served: &[String]) -> anyhow::Result<ApiVersion> {
    ApiVersion::PREFERRED
        .into_iter()
        .find(|v| served.iter().any(|s| s == v.as_str()))
        .ok_or_else(|| KubernetesError::unsupported_api_version(&served.join(", ")))
}

// Ask the apiserver which versions of the tekton.dev group it serves; this is a single call
// to `/apis`, we don't need the full per-version resource discovery.
pub async fn discover_api_version(client: &kube::Client) -> anyhow::Result<ApiVersion> {
    let group_list = client.list_api_groups().await?;
    let Some(group) = group_list.groups.iter().find(|g| g.name == GROUP) else {
        bail!(KubernetesError::missing_api_group(GROUP));
    };

    let served: Vec<_> = group.versions.iter().map(|v| v.version.clone()).collect();
    let version = select_api_version(&served)?;
    info!("using {GROUP}/{version} (served versions: {served:?})");
    Ok(version)
}
