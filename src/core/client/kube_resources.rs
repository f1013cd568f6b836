/// Re-export the Kubernetes resource types this crate reads from k8s-openapi
pub use k8s_openapi::api::core::v1::Pod;
