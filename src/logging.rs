//! Diagnostics for the binary. Everything goes to stderr; stdout carries only
//! the interactive session.

use tracing::error;
use tracing_subscriber::{filter::Directive, EnvFilter};

use crate::Error;

const DEFAULT_FILTER: &str = "warn";

/// Target of the record emitted for the error that ends the process.
pub const FATAL_TARGET: &str = "tweet_pin::fatal";

/// `RUST_LOG` directives (or `warn` when unset or invalid), with the fatal
/// target pinned at `error` so a failing run always says why.
pub fn filter(directives: Option<&str>) -> EnvFilter {
    let filter = directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));
    match format!("{}=error", FATAL_TARGET).parse::<Directive>() {
        Ok(fatal) => filter.add_directive(fatal),
        Err(_) => filter,
    }
}

pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(directives.as_deref()))
        .init();
}

/// Logs the error that stops the client.
pub fn report(err: &Error) {
    error!(target: FATAL_TARGET, "{}", err);
}
