//! Front controller binary.
//!
//! Fail fast: any startup error is fatal. Subsystems initialize in
//! order; the listener starts last so traffic only arrives when ready.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use frontdoor::config::load_descriptor;
use frontdoor::observability::{logging, metrics};
use frontdoor::{HandlerRegistry, HttpServer, RouteTable};

#[derive(Parser)]
#[command(name = "frontdoor")]
#[command(about = "Descriptor-driven HTTP front controller", long_about = None)]
struct Cli {
    /// Path to the TOML deployment descriptor.
    #[arg(short, long, default_value = "frontdoor.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let descriptor = match load_descriptor(&cli.config) {
        Ok(descriptor) => descriptor,
        Err(error) => {
            eprintln!("frontdoor: cannot load {}: {error}", cli.config.display());
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&descriptor.observability.log_level);
    tracing::info!(
        config = %cli.config.display(),
        routes = descriptor.handlers.len(),
        "Descriptor loaded"
    );

    for library in &descriptor.libraries {
        tracing::debug!(
            name = %library.name,
            version = %library.version,
            "Library dependency declared; resolved by the runtime"
        );
    }

    let table = RouteTable::from_entries(&descriptor.handlers);

    // Script implementations are registered by the embedding application;
    // the stock binary starts with an empty registry.
    let registry = HandlerRegistry::new();
    for id in registry.missing_from(&table) {
        tracing::warn!(handler = %id, "Script route declared but no handler registered");
    }

    if descriptor.observability.metrics_enabled {
        match descriptor.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %descriptor.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(descriptor, table, registry);
    if let Err(error) = server.run().await {
        tracing::error!(error = %error, "Server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
