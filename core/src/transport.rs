//! Transport seam and the bundled reqwest-backed implementation.
//!
//! # Design
//! [`Transport`] decouples the client from the actual networking stack:
//! `submit` returns immediately with a [`RequestHandle`], and the terminal
//! outcome arrives later through a one-shot channel. The handle doubles as
//! the cancellation point — a [`Canceller`] can be detached before awaiting.
//!
//! A cancelled request still resolves its completion path, with
//! [`Error::Cancelled`]; it never resolves with a payload. Cancelling after
//! completion is a no-op.

use tokio::sync::oneshot;

use crate::error::Error;
use crate::http::{HttpMethod, RawResponse, RequestDescriptor};

/// Terminal result of one submitted request.
pub type Outcome = Result<RawResponse, Error>;

/// An asynchronous executor of [`RequestDescriptor`]s.
///
/// Implementations must be safe for concurrent submissions; each submitted
/// request is independent and delivers exactly one [`Outcome`] through its
/// handle.
pub trait Transport: Send + Sync {
    fn submit(&self, request: RequestDescriptor) -> RequestHandle;
}

/// Completion path for a single in-flight request.
///
/// Await [`RequestHandle::outcome`] for the terminal result, optionally
/// detaching a [`Canceller`] first.
pub struct RequestHandle {
    completion: oneshot::Receiver<Outcome>,
    cancel: Option<oneshot::Sender<()>>,
}

impl RequestHandle {
    /// Create a handle together with its transport-side endpoints: the
    /// sender for the terminal outcome and a receiver that fires when the
    /// caller cancels.
    pub fn channel() -> (Self, oneshot::Sender<Outcome>, oneshot::Receiver<()>) {
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let handle = Self {
            completion: outcome_rx,
            cancel: Some(cancel_tx),
        };
        (handle, outcome_tx, cancel_rx)
    }

    /// Detach the canceller for this request. The first call returns the
    /// live canceller; later calls return one whose `cancel` is a no-op.
    pub fn canceller(&mut self) -> Canceller {
        Canceller {
            signal: self.cancel.take(),
        }
    }

    /// Await the terminal outcome.
    ///
    /// If the transport tears down its side without delivering (its outcome
    /// sender is dropped), the request resolves as [`Error::Cancelled`].
    pub async fn outcome(self) -> Outcome {
        match self.completion.await {
            Ok(outcome) => outcome,
            Err(_) => Err(Error::Cancelled),
        }
    }
}

/// Cancels one in-flight request.
pub struct Canceller {
    signal: Option<oneshot::Sender<()>>,
}

impl Canceller {
    /// Signal cancellation. A no-op when the request already completed or
    /// cancellation was already requested.
    pub fn cancel(mut self) {
        if let Some(signal) = self.signal.take() {
            let _ = signal.send(());
        }
    }
}

/// [`Transport`] backed by a shared [`reqwest::Client`].
///
/// Each submission spawns a tokio task that races the HTTP round-trip
/// against the cancel signal, so `submit` must be called from within a tokio
/// runtime. Session concerns (TLS, pooling, redirects) stay inside reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing `reqwest::Client`, keeping its configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn submit(&self, request: RequestDescriptor) -> RequestHandle {
        let (handle, outcome_tx, cancelled) = RequestHandle::channel();
        let client = self.client.clone();

        // A dropped canceller closes the channel with Err; only an explicit
        // send counts as a cancel request.
        let cancel_requested = async move {
            if cancelled.await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = cancel_requested => Err(Error::Cancelled),
                outcome = execute(client, request) => outcome,
            };
            // The receiver may be gone if the caller dropped the handle.
            let _ = outcome_tx.send(outcome);
        });

        handle
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}

/// Run one round-trip and collect the full response as plain data.
async fn execute(client: reqwest::Client, request: RequestDescriptor) -> Outcome {
    let mut builder = client.request(reqwest_method(request.method), request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?
        .to_vec();

    Ok(RawResponse {
        status,
        headers,
        body,
    })
}
