//! CloudEvents HTTP binding header constants
//!
//! Events go over the wire in binary content mode: every core attribute is
//! a `ce-*` header, extensions get a `ce-` prefixed header each, and the
//! payload travels as the request body with its own content type.

/// Spec version header name
pub const CE_SPECVERSION: &str = "ce-specversion";

/// Event identifier header name
pub const CE_ID: &str = "ce-id";

/// Event source header name
pub const CE_SOURCE: &str = "ce-source";

/// Event type header name
pub const CE_TYPE: &str = "ce-type";

/// Event subject header name
pub const CE_SUBJECT: &str = "ce-subject";

/// Capture timestamp header name (RFC 3339)
pub const CE_TIME: &str = "ce-time";

/// Prefix applied to every extension attribute header
pub const CE_EXTENSION_PREFIX: &str = "ce-";

/// Spec version value stamped on every outbound request
pub const SPEC_VERSION: &str = "1.0";
