mod version;

pub use version::*;

use crate::errors::*;

err_impl! {KubernetesError,
    #[error("{0} API group is not served by the cluster")]
    MissingApiGroup(String),

    #[error("unknown tekton.dev API version: {0} (expected v1beta1 or v1alpha1)")]
    UnknownApiVersion(String),

    #[error("tekton.dev API group does not serve a supported version (found: {0})")]
    UnsupportedApiVersion(String),
}

#[cfg(test)]
mod tests;
