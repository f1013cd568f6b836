use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Couldn't resolve cluster access: {0}")]
    Configuration(#[source] BoxError),

    #[error("Couldn't create client: {0}")]
    ClientConstruction(#[source] kube::Error),

    #[error("Couldn't list pods in '{namespace}': {source}")]
    Request {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Couldn't write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    /// Helper for mapping any config loading error into a configuration error
    pub fn configuration<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        ReportError::Configuration(err.into())
    }

    /// Only a rejected list call may succeed on a later attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, ReportError::Request { .. })
    }
}
