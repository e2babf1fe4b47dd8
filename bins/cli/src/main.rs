//! Rentquote interactive budgeting CLI
//!
//! Collects the client's choices from the console, prices the rental,
//! prints a summary, and optionally exports a 12-month schedule.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rentquote_core::pricing::PricingConfig;

mod error;
mod prompt;
mod session;

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PricingConfig::default();
    if let Err(err) = session::run(&config) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
