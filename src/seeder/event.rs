//! Event construction
//!
//! One [`Event`] is built per tick from the static identity fields, the
//! shared extension map, and the shared payload. Events are read-only once
//! built; the dispatcher wraps them in `Arc` so every delivery task observes
//! the identical snapshot.

use crate::seeder::extensions::ExtensionMap;
use crate::seeder::payload::Payload;
use crate::seeder::types::{EventId, EventIdentity, EventSource, EventSubject, EventType};
use bytes::Bytes;
use chrono::{DateTime, Utc};

/// Content type attached to the binary payload
pub const PAYLOAD_CONTENT_TYPE: &str = "application/octet-stream";

/// Binary payload plus its content type
#[derive(Clone, Debug)]
pub struct EventData {
    pub content_type: &'static str,
    pub bytes: Bytes,
}

/// The structured message unit delivered to the target
#[derive(Clone, Debug)]
pub struct Event {
    pub id: EventId,
    pub source: EventSource,
    pub event_type: EventType,
    pub subject: EventSubject,
    pub time: DateTime<Utc>,
    pub data: Option<EventData>,
    pub extensions: ExtensionMap,
}

/// Builds one event per tick from parts constructed once at startup
#[derive(Clone, Debug)]
pub struct EventBuilder {
    identity: EventIdentity,
    extensions: ExtensionMap,
    payload: Payload,
}

impl EventBuilder {
    pub fn new(identity: EventIdentity, extensions: ExtensionMap, payload: Payload) -> Self {
        Self {
            identity,
            extensions,
            payload,
        }
    }

    /// Assemble a fresh event: new id, current timestamp, shared payload and
    /// extensions. Never fails.
    pub fn build(&self) -> Event {
        let data = if self.payload.is_empty() {
            None
        } else {
            Some(EventData {
                content_type: PAYLOAD_CONTENT_TYPE,
                bytes: self.payload.bytes(),
            })
        };

        Event {
            id: EventId::generate(),
            source: self.identity.source.clone(),
            event_type: self.identity.event_type.clone(),
            subject: self.identity.subject.clone(),
            time: Utc::now(),
            data,
            extensions: self.extensions.clone(),
        }
    }
}
