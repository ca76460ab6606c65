//! Delivery outcome reporting
//!
//! The reporting capability is handed to the dispatcher at construction
//! instead of being reached for as process-global state, so tests can
//! observe outcomes and alternative sinks can be swapped in.

use crate::seeder::types::{EventId, TargetUrl};
use crate::transport::TransportError;
use bytes::Bytes;
use tracing::{error, info, warn};

/// Sink for per-delivery outcomes
pub trait DeliveryReporter: Send + Sync {
    /// A delivery was acknowledged, optionally with a reply body.
    fn delivered(&self, event_id: EventId, target: &TargetUrl, reply: Option<&Bytes>);

    /// A delivery failed: negative acknowledgment or transport error.
    fn failed(&self, event_id: EventId, target: &TargetUrl, error: &TransportError);

    /// A delivery task was never launched: in-flight capacity exhausted.
    fn dropped(&self, event_id: EventId, target: &TargetUrl);
}

/// Reporter that logs outcomes through `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl DeliveryReporter for TracingReporter {
    fn delivered(&self, event_id: EventId, target: &TargetUrl, reply: Option<&Bytes>) {
        info!("Successfully seeded event (id={event_id}) to target \"{target}\"");
        if let Some(reply) = reply {
            info!("Event replied: {}", String::from_utf8_lossy(reply));
        }
    }

    fn failed(&self, event_id: EventId, target: &TargetUrl, error: &TransportError) {
        error!("Failed to seed event (id={event_id}) to target \"{target}\": {error}");
    }

    fn dropped(&self, event_id: EventId, target: &TargetUrl) {
        warn!("Dropped delivery of event (id={event_id}) to target \"{target}\": in-flight capacity exhausted");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Outcome captured by [`RecordingReporter`]
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Outcome {
        Delivered { event_id: EventId, reply: Option<Vec<u8>> },
        Failed { event_id: EventId, error: String },
        Dropped { event_id: EventId },
    }

    /// Reporter that records outcomes for assertions
    #[derive(Debug, Default)]
    pub struct RecordingReporter {
        outcomes: Mutex<Vec<Outcome>>,
    }

    impl RecordingReporter {
        pub fn outcomes(&self) -> Vec<Outcome> {
            self.outcomes.lock().expect("reporter lock poisoned").clone()
        }

        pub fn delivered_count(&self) -> usize {
            self.outcomes()
                .iter()
                .filter(|outcome| matches!(outcome, Outcome::Delivered { .. }))
                .count()
        }

        pub fn dropped_count(&self) -> usize {
            self.outcomes()
                .iter()
                .filter(|outcome| matches!(outcome, Outcome::Dropped { .. }))
                .count()
        }

        fn push(&self, outcome: Outcome) {
            self.outcomes.lock().expect("reporter lock poisoned").push(outcome);
        }
    }

    impl DeliveryReporter for RecordingReporter {
        fn delivered(&self, event_id: EventId, _target: &TargetUrl, reply: Option<&Bytes>) {
            self.push(Outcome::Delivered {
                event_id,
                reply: reply.map(|bytes| bytes.to_vec()),
            });
        }

        fn failed(&self, event_id: EventId, _target: &TargetUrl, error: &TransportError) {
            self.push(Outcome::Failed {
                event_id,
                error: error.to_string(),
            });
        }

        fn dropped(&self, event_id: EventId, _target: &TargetUrl) {
            self.push(Outcome::Dropped { event_id });
        }
    }
}
