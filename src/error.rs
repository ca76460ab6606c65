use crate::seeder::SeederError;
use crate::transport::TransportError;
use thiserror::Error;

/// Application error types surfaced at startup
///
/// Steady-state delivery failures never reach this type; they are reported
/// by the owning delivery task and swallowed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid seeder configuration: {0}")]
    Seeder(#[from] SeederError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, Error>;
