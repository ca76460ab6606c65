//! Tick-build-dispatch core
//!
//! The seeder builds one event per tick and fans it out to the target in
//! parallel fire-and-forget deliveries:
//! - Extension parser and payload generator run once at startup
//! - The event builder stamps a fresh id and timestamp each tick
//! - The dispatcher launches the per-tick delivery tasks, capped by the
//!   in-flight limit
//! - The scheduler spaces ticks by the configured interval and owns the
//!   shutdown boundary

pub mod dispatcher;
pub mod event;
pub mod extensions;
pub mod payload;
pub mod reporter;
pub mod scheduler;
pub mod types;

pub use dispatcher::Dispatcher;
pub use event::{Event, EventBuilder};
pub use extensions::ExtensionMap;
pub use payload::Payload;
pub use reporter::{DeliveryReporter, TracingReporter};
pub use scheduler::Scheduler;
pub use types::{SeederConfig, SeederError};
