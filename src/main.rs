use std::io;
use std::process::ExitCode;

use apiserver_pod_reporter::core::logging::init_tracing;
use apiserver_pod_reporter::{build_client, resolve_access, run_to_exit};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env is fine; KUBECONFIG and RUST_LOG may come from the shell
    let _ = dotenvy::dotenv();
    init_tracing();

    run_to_exit(resolve_access(), build_client, &mut io::stdout()).await
}
