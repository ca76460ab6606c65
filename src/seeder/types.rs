//! Type definitions for the seeder module

use crate::config::Settings;
use nutype::nutype;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

// ========== Identity Types ==========

/// Unique identifier carried by every built event
#[nutype(
    derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, TryFrom, AsRef),
    validate(predicate = |id: &Uuid| id.get_version_num() == 4),
)]
pub struct EventId(Uuid);

impl EventId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        // Uuid::new_v4() always creates a valid v4 UUID
        Self::try_new(Uuid::new_v4()).expect("Uuid::new_v4 produces a version 4 UUID")
    }
}

/// Source attribute identifying the producer of an event
#[nutype(
    derive(Clone, Debug, Display, PartialEq, Eq, TryFrom, AsRef),
    validate(predicate = |s: &str| !s.is_empty()),
)]
pub struct EventSource(String);

/// Type attribute classifying an event
#[nutype(
    derive(Clone, Debug, Display, PartialEq, Eq, TryFrom, AsRef),
    validate(predicate = |s: &str| !s.is_empty()),
)]
pub struct EventType(String);

/// Subject attribute describing what an event is about
#[nutype(
    derive(Clone, Debug, Display, PartialEq, Eq, TryFrom, AsRef),
    validate(predicate = |s: &str| !s.is_empty()),
)]
pub struct EventSubject(String);

// ========== Capacity Types ==========

/// Number of parallel delivery tasks launched per tick
#[nutype(
    derive(Clone, Copy, Debug, Display, PartialEq, Eq, TryFrom, AsRef),
    validate(predicate = |n: &u32| *n >= 1),
)]
pub struct Concurrency(u32);

/// Length of the random payload in bytes (zero means no payload)
#[nutype(derive(Clone, Copy, Debug, Display, PartialEq, Eq, From, AsRef))]
pub struct PayloadSize(usize);

/// Cap on concurrently outstanding delivery tasks
#[nutype(
    derive(Clone, Copy, Debug, Display, PartialEq, Eq, TryFrom, AsRef),
    validate(predicate = |n: &usize| *n > 0),
)]
pub struct MaxInFlight(usize);

// ========== Target Type ==========

/// Destination endpoint receiving delivered events
#[nutype(
    derive(Clone, Debug, Display, PartialEq, Eq, TryFrom, AsRef),
    validate(predicate = |s: &str| s.starts_with("http://") || s.starts_with("https://")),
)]
pub struct TargetUrl(String);

// ========== Constants ==========

/// Source attribute stamped on every event
pub const DEFAULT_SOURCE: &str = "event-seeder.generator";

/// Type attribute stamped on every event
pub const DEFAULT_TYPE: &str = "seed";

/// Subject attribute stamped on every event
pub const DEFAULT_SUBJECT: &str = "tick";

/// Static identity fields shared by every event built in one process run
#[derive(Clone, Debug)]
pub struct EventIdentity {
    pub source: EventSource,
    pub event_type: EventType,
    pub subject: EventSubject,
}

impl Default for EventIdentity {
    fn default() -> Self {
        Self {
            source: EventSource::try_new(DEFAULT_SOURCE.to_string())
                .expect("default source is non-empty"),
            event_type: EventType::try_new(DEFAULT_TYPE.to_string())
                .expect("default type is non-empty"),
            subject: EventSubject::try_new(DEFAULT_SUBJECT.to_string())
                .expect("default subject is non-empty"),
        }
    }
}

/// Validated seeder configuration derived from raw [`Settings`]
#[derive(Clone, Debug)]
pub struct SeederConfig {
    /// Delivery destination
    pub target: TargetUrl,
    /// Duration between tick starts
    pub interval: Duration,
    /// Parallel delivery tasks per tick
    pub concurrency: Concurrency,
    /// Raw `key:value;key:value` extension spec
    pub extensions_spec: String,
    /// Random payload length in bytes
    pub payload_size: PayloadSize,
    /// Cap on outstanding delivery tasks
    pub max_in_flight: MaxInFlight,
}

impl SeederConfig {
    /// Validate raw settings into a typed configuration.
    ///
    /// Any failure here is a fatal startup error.
    pub fn from_settings(settings: &Settings) -> Result<Self, SeederError> {
        let target = TargetUrl::try_new(settings.delivery.target.clone())
            .map_err(|_| SeederError::InvalidTarget(settings.delivery.target.clone()))?;

        let concurrency = Concurrency::try_new(settings.seeding.concurrency)
            .map_err(|_| SeederError::InvalidConcurrency(settings.seeding.concurrency))?;

        let max_in_flight = MaxInFlight::try_new(settings.seeding.max_in_flight)
            .map_err(|_| SeederError::InvalidMaxInFlight(settings.seeding.max_in_flight))?;

        if settings.seeding.interval_ms == 0 {
            return Err(SeederError::InvalidInterval(settings.seeding.interval_ms));
        }

        Ok(Self {
            target,
            interval: settings.interval(),
            concurrency,
            extensions_spec: settings.seeding.extensions.clone(),
            payload_size: PayloadSize::from(settings.seeding.payload_size),
            max_in_flight,
        })
    }
}

/// Errors that can occur while validating seeder configuration
#[derive(Error, Debug)]
pub enum SeederError {
    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("Invalid concurrency (must be >= 1): {0}")]
    InvalidConcurrency(u32),

    #[error("Invalid tick interval (must be > 0 ms): {0}")]
    InvalidInterval(u64),

    #[error("Invalid in-flight capacity (must be > 0): {0}")]
    InvalidMaxInFlight(usize),
}
