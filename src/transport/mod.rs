//! Delivery transport for outbound events
//!
//! The seeder treats delivery as an opaque request/response channel: one
//! attempt in, one classified outcome out (acknowledgment, negative
//! acknowledgment, or transport error). The concrete channel speaks the
//! CloudEvents HTTP binding in binary content mode.

pub mod client;
pub mod headers;
pub mod types;

pub use client::{EventTransport, HttpTransport};
pub use types::{Acknowledgment, TransportError, TransportResult};
