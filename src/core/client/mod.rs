// Kube-rs based Kubernetes client
pub mod kube_client;
pub mod kube_resources;
pub mod pods;

#[cfg(test)]
pub(crate) mod mock_apiserver;
