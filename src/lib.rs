pub mod core;
pub mod domain;
pub mod errors;

pub use crate::core::client::kube_client::{build_client, resolve_access};
pub use crate::core::client::pods::PodSummary;
pub use crate::domain::report::service::reporter_service::{run, run_to_exit, Reporter, NAMESPACE};
pub use crate::errors::ReportError;
