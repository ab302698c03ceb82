//! Gurugolpo terminal client entry point.
//!
//! Wires the HTTP client, session store, and shell together and hands
//! control to the interactive loop.

use dotenv::dotenv;
use forum_cli::shell::Shell;
use forum_cli::{AppError, Dependencies};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("forum_cli=info,forum_session=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    let deps = match Dependencies::new() {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let mut shell = Shell::new(deps.forum);
    match shell.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(error = %e, "Shell terminated with an error");
            Err(e)
        }
    }
}
