use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "inspace=debug,info"
    } else {
        "inspace=warn"
    }
}

/// `RUST_LOG` wins when it parses; otherwise fall back to the verbosity default.
pub fn build_filter(verbose: bool, env_directives: Option<&str>) -> EnvFilter {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directives(verbose)))
}

// Logs go to stderr; stdout belongs to the rendered output.
pub fn init_cli_logger(verbose: bool) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbose, env_directives.as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
