//! HTTP delivery transport
//!
//! Performs a single request/response exchange per delivery attempt and
//! classifies the outcome: 2xx is an acknowledgment (optionally carrying a
//! reply body), anything else is a negative acknowledgment, and network or
//! timeout failures surface as transport errors. No retries.

use crate::seeder::event::Event;
use crate::seeder::types::TargetUrl;
use crate::transport::headers;
use crate::transport::types::{Acknowledgment, TransportError, TransportResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http_body_util::{BodyExt, Full};
use hyper::{Request, Uri};
use std::time::Duration;
use tracing::debug;

/// Opaque request/response channel used by the dispatcher to deliver events
#[async_trait]
pub trait EventTransport: Send + Sync {
    /// Perform one delivery attempt of `event` against the target.
    async fn request(&self, event: &Event) -> TransportResult<Acknowledgment>;
}

/// CloudEvents binary-content-mode transport over plain HTTP/1.1
pub struct HttpTransport {
    uri: Uri,
    request_timeout: Duration,
    client: hyper_util::client::legacy::Client<
        hyper_util::client::legacy::connect::HttpConnector,
        Full<Bytes>,
    >,
}

impl HttpTransport {
    /// Create a transport bound to `target`.
    ///
    /// The target is parsed once here; failure is a fatal startup error.
    pub fn new(target: &TargetUrl, request_timeout: Duration) -> TransportResult<Self> {
        let uri: Uri = target
            .as_ref()
            .parse()
            .map_err(|_| TransportError::InvalidTargetUri(target.as_ref().to_string()))?;

        let client =
            hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new())
                .build_http();

        Ok(Self {
            uri,
            request_timeout,
            client,
        })
    }

    /// Encode an event as a binary-content-mode POST request.
    fn build_request(&self, event: &Event) -> TransportResult<Request<Full<Bytes>>> {
        let mut builder = Request::post(self.uri.clone())
            .header(headers::CE_SPECVERSION, headers::SPEC_VERSION)
            .header(headers::CE_ID, event.id.to_string())
            .header(headers::CE_SOURCE, event.source.to_string())
            .header(headers::CE_TYPE, event.event_type.to_string())
            .header(headers::CE_SUBJECT, event.subject.to_string())
            .header(headers::CE_TIME, event.time.to_rfc3339());

        for (name, value) in event.extensions.iter() {
            let header_name = format!("{}{}", headers::CE_EXTENSION_PREFIX, name);
            match (
                HeaderName::try_from(header_name.as_str()),
                HeaderValue::try_from(value),
            ) {
                (Ok(header), Ok(header_value)) => {
                    builder = builder.header(header, header_value);
                }
                _ => {
                    // A delivery never fails over one unencodable attribute
                    debug!(extension = name, "Skipping extension attribute that cannot be encoded as a header");
                }
            }
        }

        let request = match &event.data {
            Some(data) => builder
                .header(CONTENT_TYPE, data.content_type)
                .body(Full::new(data.bytes.clone()))?,
            None => builder.body(Full::new(Bytes::new()))?,
        };

        Ok(request)
    }
}

#[async_trait]
impl EventTransport for HttpTransport {
    async fn request(&self, event: &Event) -> TransportResult<Acknowledgment> {
        let request = self.build_request(event)?;

        let response = tokio::time::timeout(self.request_timeout, self.client.request(request))
            .await
            .map_err(|_| TransportError::RequestTimeout(self.request_timeout))??;

        let (parts, body) = response.into_parts();
        let reply = body.collect().await?.to_bytes();

        if parts.status.is_success() {
            Ok(Acknowledgment {
                reply: (!reply.is_empty()).then_some(reply),
            })
        } else {
            Err(TransportError::NotAcknowledged {
                status: parts.status,
                detail: String::from_utf8_lossy(&reply).into_owned(),
            })
        }
    }
}
