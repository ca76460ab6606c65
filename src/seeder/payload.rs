//! One-time random payload generation
//!
//! The payload is generated exactly once at startup and shared by reference
//! (refcounted [`Bytes`]) across every event built afterwards. Regenerating
//! it per tick would be a semantic deviation, not an optimization.

use crate::seeder::types::PayloadSize;
use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Immutable random byte buffer attached to events when non-empty
#[derive(Clone, Debug)]
pub struct Payload {
    data: Bytes,
}

impl Payload {
    /// Fill a buffer of exactly `size` bytes with pseudo-random data.
    ///
    /// The RNG is seeded from OS entropy but is not cryptographic; this is
    /// test traffic, not key material.
    pub fn generate(size: PayloadSize) -> Self {
        let mut buf = vec![0u8; size.into_inner()];
        if !buf.is_empty() {
            let mut rng = StdRng::from_entropy();
            rng.fill_bytes(&mut buf);
        }
        Self {
            data: Bytes::from(buf),
        }
    }

    /// A refcounted handle to the buffer; cloning never copies the bytes.
    pub fn bytes(&self) -> Bytes {
        self.data.clone()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
