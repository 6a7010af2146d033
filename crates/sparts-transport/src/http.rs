//! Ledger transport trait and reqwest implementation
//!
//! The trait is the seam everything above the network consumes; tests and
//! precondition checks inject counting or canned stubs through it.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::{TransportError, TransportResult};
use crate::reply::StatusReply;

/// One GET/POST request/response cycle against the ledger HTTP API.
///
/// Implementations are stateless: no retries, no connection reuse
/// guarantees, at most one outstanding request per call.
#[async_trait]
pub trait LedgerTransport: Send + Sync {
    /// GET an API path and return the raw body; the caller decodes
    async fn get_bytes(&self, path: &str) -> TransportResult<Vec<u8>>;

    /// POST a JSON payload to an API path and decode the reply envelope.
    ///
    /// `operation` is the value for the `X-Custom-Header` the ledger uses
    /// for server-side dispatch and auditing; every mutating call carries it
    /// alongside the JSON content type.
    async fn post_json(
        &self,
        path: &str,
        operation: &str,
        payload: &serde_json::Value,
    ) -> TransportResult<StatusReply>;
}

/// [`LedgerTransport`] over HTTP via reqwest
pub struct HttpLedgerTransport {
    client: reqwest::Client,
    base: Url,
}

impl HttpLedgerTransport {
    /// Create a transport for a ledger address.
    ///
    /// The address may be a bare `host:port`; a missing scheme defaults to
    /// `http://`, matching how ledger addresses are configured.
    pub fn new(address: &str) -> TransportResult<Self> {
        let normalized = if address.contains("://") {
            address.to_owned()
        } else {
            format!("http://{address}")
        };
        let base = Url::parse(&normalized)
            .map_err(|e| TransportError::InvalidAddress(format!("{address}: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    fn endpoint(&self, path: &str) -> TransportResult<Url> {
        self.base
            .join(path)
            .map_err(|e| TransportError::InvalidAddress(format!("{path}: {e}")))
    }
}

#[async_trait]
impl LedgerTransport for HttpLedgerTransport {
    async fn get_bytes(&self, path: &str) -> TransportResult<Vec<u8>> {
        let url = self.endpoint(path)?;
        debug!(%url, "ledger GET");

        let response = self.client.get(url).send().await?;
        let body = response.bytes().await?;
        debug!(len = body.len(), "ledger GET reply");
        Ok(body.to_vec())
    }

    async fn post_json(
        &self,
        path: &str,
        operation: &str,
        payload: &serde_json::Value,
    ) -> TransportResult<StatusReply> {
        let url = self.endpoint(path)?;
        debug!(%url, operation, "ledger POST");

        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("X-Custom-Header", operation)
            .json(payload)
            .send()
            .await?;

        let body = response.bytes().await?;
        let reply: StatusReply = serde_json::from_slice(&body).map_err(|e| {
            TransportError::MalformedResponse(format!(
                "{operation} reply did not decode: {e}"
            ))
        })?;
        debug!(operation, status = %reply.status, "ledger POST reply");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_scheme_defaults_to_http() {
        let transport = HttpLedgerTransport::new("ledger.example:818").unwrap();
        let url = transport.endpoint("/api/sparts/ledger/parts").unwrap();
        assert_eq!(url.as_str(), "http://ledger.example:818/api/sparts/ledger/parts");
    }

    #[test]
    fn test_explicit_scheme_kept() {
        let transport = HttpLedgerTransport::new("https://ledger.example").unwrap();
        let url = transport.endpoint("/x").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_garbage_address_rejected() {
        assert!(matches!(
            HttpLedgerTransport::new("http://[bad"),
            Err(TransportError::InvalidAddress(_))
        ));
    }

    #[tokio::test]
    async fn test_post_sets_dispatch_headers() {
        let server = MockServer::start().await;
        let payload = serde_json::json!({"part_uuid": "a", "envelope_uuid": "b"});

        Mock::given(method("POST"))
            .and(path("/api/sparts/ledger/parts/AddEnvelope"))
            .and(header("X-Custom-Header", "PartToArtifact"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpLedgerTransport::new(&server.uri()).unwrap();
        let reply = transport
            .post_json("/api/sparts/ledger/parts/AddEnvelope", "PartToArtifact", &payload)
            .await
            .unwrap();
        assert!(reply.is_success());
    }

    #[tokio::test]
    async fn test_non_json_reply_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let transport = HttpLedgerTransport::new(&server.uri()).unwrap();
        let err = transport
            .post_json("/api/sparts/ledger/parts", "AddPart", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_surfaces_verbatim() {
        // Nothing listens on this port.
        let transport = HttpLedgerTransport::new("127.0.0.1:1").unwrap();
        let err = transport.get_bytes("/api/sparts/ledger/parts").await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}
