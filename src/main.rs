use clap::Parser;
use inspace::domain::ports::ConfigProvider;
use inspace::utils::{logger, terminal, validation::Validate};
use inspace::{CliConfig, HttpFetcher, InSpaceApp, Renderer};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting inspace");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let renderer = Renderer::new(config.clear_screen(), terminal::supports_color());
    let app = InSpaceApp::new(HttpFetcher::new(config), renderer);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = app.run(&mut out).await {
        tracing::error!("inspace failed: {} (kind: {:?})", e, e.kind());
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
