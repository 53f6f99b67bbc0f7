//! Request building and response interpretation for the HTTP client.
//!
//! # Design
//! `HttpClient` holds only a transport and carries no state between calls.
//! Each operation is a single Built → Submitted → terminal exchange: the
//! request descriptor is built up front, handed to the transport, and the
//! one-shot outcome is normalized into a decoded JSON value, raw bytes, or
//! an [`Error`]. Nothing is retried or logged here; that belongs to the
//! caller.

use std::collections::BTreeMap;

use crate::error::Error;
use crate::http::{HttpMethod, RawResponse, RequestDescriptor};
use crate::transport::{RequestHandle, Transport};

/// Stateless client over a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpClient<T> {
    transport: T,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Build a ready-to-send descriptor. See [`RequestDescriptor::new`] for
    /// the parameter-encoding rules.
    pub fn make_request(
        &self,
        url: &str,
        method: HttpMethod,
        parameters: Option<&BTreeMap<String, String>>,
    ) -> Result<RequestDescriptor, Error> {
        RequestDescriptor::new(url, method, parameters)
    }

    /// Submit a descriptor and hand back the raw completion path, for
    /// callers that need to cancel the request while it is in flight.
    pub fn dispatch(&self, request: RequestDescriptor) -> RequestHandle {
        self.transport.submit(request)
    }

    /// Build, submit, and decode the response body as JSON.
    ///
    /// Returns [`Error::InvalidStatusCode`] for non-2xx answers,
    /// [`Error::NoData`] when a successful answer has an empty body, and
    /// [`Error::Decode`] when the body is not valid JSON. Transport failures
    /// propagate unchanged.
    pub async fn send_json(
        &self,
        url: &str,
        method: HttpMethod,
        parameters: Option<&BTreeMap<String, String>>,
    ) -> Result<serde_json::Value, Error> {
        let request = self.make_request(url, method, parameters)?;
        let response = self.transport.submit(request).outcome().await?;
        let body = non_empty_success_body(response)?;
        serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Build, submit, and return the response body byte-for-byte, under the
    /// same status and empty-body rules as [`HttpClient::send_json`].
    pub async fn send_raw(&self, request: RequestDescriptor) -> Result<Vec<u8>, Error> {
        let response = self.transport.submit(request).outcome().await?;
        non_empty_success_body(response)
    }
}

/// Status check first (body content is irrelevant on non-2xx), then the
/// empty-body check.
fn non_empty_success_body(response: RawResponse) -> Result<Vec<u8>, Error> {
    if !(200..300).contains(&response.status) {
        return Err(Error::InvalidStatusCode {
            status: response.status,
        });
    }
    if response.body.is_empty() {
        return Err(Error::NoData);
    }
    Ok(response.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Transport that resolves every submission with a canned outcome,
    /// without ever touching the network.
    struct StubTransport {
        status: u16,
        body: Vec<u8>,
    }

    impl StubTransport {
        fn new(status: u16, body: &[u8]) -> Self {
            Self {
                status,
                body: body.to_vec(),
            }
        }
    }

    impl Transport for StubTransport {
        fn submit(&self, _request: RequestDescriptor) -> RequestHandle {
            let (handle, outcome_tx, _cancelled) = RequestHandle::channel();
            let _ = outcome_tx.send(Ok(RawResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.clone(),
            }));
            handle
        }
    }

    /// Transport that always fails at the network layer.
    struct FailingTransport;

    impl Transport for FailingTransport {
        fn submit(&self, _request: RequestDescriptor) -> RequestHandle {
            let (handle, outcome_tx, _cancelled) = RequestHandle::channel();
            let _ = outcome_tx.send(Err(Error::Transport("connection refused".to_string())));
            handle
        }
    }

    /// Transport that never delivers on its own and resolves with
    /// `Cancelled` when the caller cancels.
    struct PendingTransport;

    impl Transport for PendingTransport {
        fn submit(&self, _request: RequestDescriptor) -> RequestHandle {
            let (handle, outcome_tx, cancelled) = RequestHandle::channel();
            tokio::spawn(async move {
                if cancelled.await.is_ok() {
                    let _ = outcome_tx.send(Err(Error::Cancelled));
                }
            });
            handle
        }
    }

    const URL: &str = "http://localhost:3000/api/v1/counters";

    #[tokio::test]
    async fn send_json_decodes_a_successful_body() {
        let client = HttpClient::new(StubTransport::new(200, br#"{"a":1}"#));
        let value = client.send_json(URL, HttpMethod::Get, None).await.unwrap();
        assert_eq!(value, serde_json::json!({"a": 1}));
    }

    #[tokio::test]
    async fn send_json_rejects_non_success_status_regardless_of_body() {
        let client = HttpClient::new(StubTransport::new(404, br#"{"a":1}"#));
        let err = client.send_json(URL, HttpMethod::Get, None).await.unwrap_err();
        assert!(matches!(err, Error::InvalidStatusCode { status: 404 }));
    }

    #[tokio::test]
    async fn send_json_maps_empty_success_body_to_no_data() {
        let client = HttpClient::new(StubTransport::new(200, b""));
        let err = client.send_json(URL, HttpMethod::Get, None).await.unwrap_err();
        assert!(matches!(err, Error::NoData));
    }

    #[tokio::test]
    async fn send_json_maps_invalid_json_to_decode_error() {
        let client = HttpClient::new(StubTransport::new(200, b"not json"));
        let err = client.send_json(URL, HttpMethod::Get, None).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn send_json_propagates_transport_errors_unchanged() {
        let client = HttpClient::new(FailingTransport);
        let err = client.send_json(URL, HttpMethod::Get, None).await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn send_json_reports_invalid_urls_without_submitting() {
        let client = HttpClient::new(FailingTransport);
        let err = client
            .send_json("not a url", HttpMethod::Get, None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn send_raw_returns_the_body_byte_for_byte() {
        let payload = b"\x00\x01binary\xffpayload";
        let client = HttpClient::new(StubTransport::new(200, payload));
        let request = client.make_request(URL, HttpMethod::Get, None).unwrap();
        let body = client.send_raw(request).await.unwrap();
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn send_raw_maps_empty_success_body_to_no_data() {
        let client = HttpClient::new(StubTransport::new(204, b""));
        let request = client.make_request(URL, HttpMethod::Delete, None).unwrap();
        let err = client.send_raw(request).await.unwrap_err();
        assert!(matches!(err, Error::NoData));
    }

    #[tokio::test]
    async fn send_raw_rejects_non_success_status() {
        let client = HttpClient::new(StubTransport::new(500, b"boom"));
        let request = client.make_request(URL, HttpMethod::Get, None).unwrap();
        let err = client.send_raw(request).await.unwrap_err();
        assert!(matches!(err, Error::InvalidStatusCode { status: 500 }));
    }

    #[tokio::test]
    async fn cancelled_dispatch_never_yields_a_payload() {
        let client = HttpClient::new(PendingTransport);
        let request = client.make_request(URL, HttpMethod::Get, None).unwrap();

        let mut handle = client.dispatch(request);
        let canceller = handle.canceller();
        canceller.cancel();

        let err = handle.outcome().await.unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }
}
