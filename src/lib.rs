//! Panchayat Election Registry
//!
//! An in-memory election session: a fixed candidate roster, a voter
//! register with one-vote-per-voter enforcement, and pure helpers for
//! regional vote aggregation.

pub mod config;
pub mod errors;
pub mod registry;
pub mod tally;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use errors::{Error, Result};
pub use registry::Election;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the election registry with proper logging
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "panchayat=info".into()),
        )
        .init();

    tracing::info!("🗳️  Election registry v{} initialized", VERSION);
    Ok(())
}
