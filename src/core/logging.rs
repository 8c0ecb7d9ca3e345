use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::LogConfig;
use crate::core::error::{AppError, Result};

/// Install the global tracing subscriber (env filter + fmt layer).
///
/// Fails instead of panicking when a subscriber is already installed, so
/// embedding services that set up their own tracing can ignore the error.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| AppError::Config(format!("Invalid log filter '{}': {}", config.filter, e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to install tracing subscriber: {}", e)))
}
