use std::future::Future;
use std::io::Write;
use std::process::ExitCode;

use kube::{Client, Config};
use tracing::{error, info};

use crate::core::client::kube_client::build_client;
use crate::core::client::pods::{fetch_pod_summaries_by_namespace, PodSummary};
use crate::errors::ReportError;

/// Namespace whose pods are reported
pub const NAMESPACE: &str = "openshift-kube-apiserver";

/// Marker written in front of every reported pod name
const LINE_MARKER: &str = "- ";

/// Lists the pods of one namespace and writes their names out.
pub struct Reporter {
    client: Client,
    namespace: &'static str,
}

impl Reporter {
    /// Builds the client from an explicit access configuration.
    pub fn new(config: Config) -> Result<Self, ReportError> {
        let client = build_client(config)?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            namespace: NAMESPACE,
        }
    }

    pub async fn list_pods(&self) -> Result<Vec<PodSummary>, ReportError> {
        info!("Looking for kube-apiserver pods...");
        fetch_pod_summaries_by_namespace(&self.client, self.namespace).await
    }

    /// One line per pod, in the order given.
    pub fn report<W: Write>(&self, pods: &[PodSummary], out: &mut W) -> Result<(), ReportError> {
        info!("Pods in '{}': ", self.namespace);
        for pod in pods {
            writeln!(out, "{} {}", LINE_MARKER, pod.name)?;
        }
        out.flush()?;
        Ok(())
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let pods = self.list_pods().await?;
        self.report(&pods, out)
    }
}

/// Resolve access, build the client, list and report, stopping at the first failure.
///
/// `build` is only called once `resolve` has produced a configuration.
pub async fn run<F, B, W>(resolve: F, build: B, out: &mut W) -> Result<(), ReportError>
where
    F: Future<Output = Result<Config, ReportError>>,
    B: FnOnce(Config) -> Result<Client, ReportError>,
    W: Write,
{
    info!("Creating the client");
    let config = resolve.await?;
    let reporter = Reporter::from_client(build(config)?);
    reporter.run(out).await
}

/// Like [`run`], but logs a failure once and maps the outcome to the process exit status.
pub async fn run_to_exit<F, B, W>(resolve: F, build: B, out: &mut W) -> ExitCode
where
    F: Future<Output = Result<Config, ReportError>>,
    B: FnOnce(Config) -> Result<Client, ReportError>,
    W: Write,
{
    match run(resolve, build, out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
