//! Asynchronous HTTP client core for the Counters API.
//!
//! # Overview
//! Builds [`RequestDescriptor`] values, dispatches them through a
//! [`Transport`], and normalizes each outcome into a decoded JSON value, a
//! raw byte buffer, or a typed [`Error`]. Completion is a one-shot channel
//! per request; a handle returned at submission allows cancellation.
//!
//! # Design
//! - `HttpClient` is stateless; every request is an independent Built →
//!   Submitted → terminal exchange with no retries.
//! - The transport is a trait so tests run against stubs while production
//!   uses the bundled [`ReqwestTransport`].
//! - Parameter placement (query string vs JSON body) is a pure function of
//!   the verb.
//! - Errors form a closed enum with stable integer codes under
//!   [`ERROR_DOMAIN`]; none are logged or retried by this crate.

pub mod client;
pub mod counters;
pub mod error;
pub mod http;
pub mod routes;
pub mod transport;
pub mod types;

pub use client::HttpClient;
pub use counters::CounterStore;
pub use error::{Error, ERROR_DOMAIN};
pub use http::{HttpMethod, RawResponse, RequestDescriptor};
pub use routes::Route;
pub use transport::{Canceller, Outcome, ReqwestTransport, RequestHandle, Transport};
pub use types::Counter;
