use kube::api::ListParams;
use kube::{Api, Client, ResourceExt};
use tracing::debug;

use crate::core::client::kube_resources::Pod;
use crate::errors::ReportError;

/// Name of a single listed pod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodSummary {
    pub name: String,
}

impl From<&Pod> for PodSummary {
    fn from(pod: &Pod) -> Self {
        // Unnamed entries still get a line so the report mirrors the list
        PodSummary {
            name: pod.metadata.name.clone().unwrap_or_default(),
        }
    }
}

/// Fetch pods in a specific namespace with a single list call
pub async fn fetch_pods_by_namespace(client: &Client, namespace: &str) -> Result<Vec<Pod>, ReportError> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod_list = pods
        .list(&ListParams::default())
        .await
        .map_err(|source| ReportError::Request {
            namespace: namespace.to_string(),
            source,
        })?;

    debug!("Discovered {} pod(s) in namespace '{}'", pod_list.items.len(), namespace);
    Ok(pod_list.items)
}

/// Fetch pod summaries in a specific namespace, in server order
pub async fn fetch_pod_summaries_by_namespace(
    client: &Client,
    namespace: &str,
) -> Result<Vec<PodSummary>, ReportError> {
    let pods = fetch_pods_by_namespace(client, namespace).await?;
    for pod in pods.iter().filter(|p| p.metadata.name.is_none()) {
        debug!("Pod without a name in '{}' (uid {:?})", namespace, pod.uid());
    }

    Ok(pods.iter().map(PodSummary::from).collect())
}
