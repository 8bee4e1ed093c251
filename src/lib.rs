pub mod approvals; // Admin approval queue + recent-activity feed
pub mod billing; // Billing ledger
pub mod config;
pub mod error;
pub mod lifecycle; // Appointment state machine
pub mod models;
pub mod notifications; // Notification store
pub mod query; // Shared list filter + search combinator
pub mod roster; // Doctor-facing patient roster
pub mod seed;
pub mod session; // Owning session store + command dispatch
pub mod store; // Durable key-value projection

pub use error::DomainError;
pub use session::{Command, CommandOutcome, SessionStore};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for hosts that embed the core (CLI harness, tests).
///
/// Respects `RUST_LOG`; falls back to the crate default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("MediHub core starting v{}", config::APP_VERSION);
}
