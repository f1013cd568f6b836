use std::io::{self, IsTerminal};

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Only this crate logs by default; kube's transport errors would repeat ours.
pub const DEFAULT_DIRECTIVES: &str = "apiserver_pod_reporter=info";

pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

pub fn build_subscriber<W>(filter: EnvFilter, writer: W, ansi: bool) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

/// Installs the global fmt subscriber on stdout.
///
/// `RUST_LOG` overrides the default directives. Colours are only used on a terminal.
/// Calling this twice is a no-op.
pub fn init_tracing() {
    let ansi = io::stdout().is_terminal();
    let _ = build_subscriber(default_filter(), io::stdout, ansi).try_init();
}
