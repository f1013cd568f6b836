use kube::{config::KubeConfigOptions, config::Kubeconfig, Client, Config};
use tracing::debug;

use crate::errors::ReportError;

/// Resolves cluster access from the ambient environment.
///
/// Tries `KUBECONFIG` / `~/.kube/config` first and falls back to the
/// in-cluster service account mount.
pub async fn resolve_access() -> Result<Config, ReportError> {
    let config = Config::infer().await.map_err(ReportError::configuration)?;

    debug!("Resolved cluster access for {}", config.cluster_url);
    Ok(config)
}

/// Resolves cluster access from an already loaded kubeconfig
pub async fn resolve_access_from_kubeconfig(kubeconfig: Kubeconfig) -> Result<Config, ReportError> {
    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(ReportError::configuration)?;

    debug!("Resolved cluster access for {}", config.cluster_url);
    Ok(config)
}

/// Creates a Kubernetes client bound to the given configuration.
/// No request is sent to the cluster here.
pub fn build_client(config: Config) -> Result<Client, ReportError> {
    let client = Client::try_from(config).map_err(ReportError::ClientConstruction)?;

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}
