//! Plain-data HTTP request and response types.
//!
//! # Design
//! A `RequestDescriptor` is the fully-specified, ready-to-send form of an
//! HTTP request; a `RawResponse` is what the transport hands back after the
//! round-trip. Both are plain data with owned fields so they can move across
//! task boundaries freely. Neither type performs any I/O — execution belongs
//! to a [`Transport`](crate::transport::Transport).

use std::collections::BTreeMap;

use url::Url;

use crate::error::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Whether request parameters for this verb belong in the URL query
    /// string. For every other verb they are carried as a JSON body.
    pub fn encodes_parameters_in_query(&self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Head)
    }
}

/// An HTTP request described as plain data.
///
/// Built by [`RequestDescriptor::new`] (or `HttpClient::make_request`), then
/// handed to a transport for execution.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: Url,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RequestDescriptor {
    /// Build a descriptor from a URL string, a verb, and optional string
    /// parameters.
    ///
    /// Parameters are appended to the query string for query-encoded verbs
    /// and serialized as a JSON object body (with the matching content-type
    /// header) for all others. Fails with [`Error::InvalidUrl`] when `url`
    /// does not parse.
    pub fn new(
        url: &str,
        method: HttpMethod,
        parameters: Option<&BTreeMap<String, String>>,
    ) -> Result<Self, Error> {
        let mut url = Url::parse(url).map_err(|e| Error::InvalidUrl(e.to_string()))?;
        let mut headers = Vec::new();
        let mut body = None;

        if let Some(params) = parameters.filter(|p| !p.is_empty()) {
            if method.encodes_parameters_in_query() {
                url.query_pairs_mut().extend_pairs(params.iter());
            } else {
                let object: serde_json::Map<String, serde_json::Value> = params
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect();
                headers.push(("content-type".to_string(), "application/json".to_string()));
                body = Some(serde_json::Value::Object(object).to_string().into_bytes());
            }
        }

        Ok(Self {
            url,
            method,
            headers,
            body,
        })
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by a transport after executing a [`RequestDescriptor`]. The
/// body is kept as raw bytes; interpretation (status checks, JSON decoding)
/// happens in `HttpClient`.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}
