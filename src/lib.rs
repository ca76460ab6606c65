//! Event Seeder - a synthetic CloudEvents traffic generator
//!
//! Periodically builds structured events and delivers them to a configured
//! HTTP endpoint in parallel fire-and-forget bursts, for load-testing and
//! smoke-testing event-driven receivers. Delivery is best-effort by design:
//! no retries, no persistence, no feedback from outcomes into tick cadence.

pub mod application;
pub mod config;
pub mod error;
pub mod seeder;
pub mod transport;

pub use application::Application;
pub use error::{Error, Result};
