//! Domain DTOs for the Counters API.
//!
//! Defined independently of the mock-server's schema; the integration tests
//! catch drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single counter returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Counter {
    pub id: String,
    pub title: String,
    pub count: i64,
}
