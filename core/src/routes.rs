//! Route table for the Counters API.
//!
//! Each route knows its verb, its path under `/api/v1/`, and the string
//! parameters it carries. Mutating routes identify the target counter by its
//! `id` in the request body; creation carries the new `title`.

use std::collections::BTreeMap;

use crate::http::HttpMethod;

const BASE_PATH: &str = "/api/v1";

const TITLE_KEY: &str = "title";
const ID_KEY: &str = "id";

/// One logical operation against the Counters API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    GetCounters,
    CreateCounter { title: String },
    IncreaseCounter { id: String },
    DecreaseCounter { id: String },
    DeleteCounter { id: String },
}

impl Route {
    pub fn method(&self) -> HttpMethod {
        match self {
            Route::GetCounters => HttpMethod::Get,
            Route::CreateCounter { .. }
            | Route::IncreaseCounter { .. }
            | Route::DecreaseCounter { .. } => HttpMethod::Post,
            Route::DeleteCounter { .. } => HttpMethod::Delete,
        }
    }

    /// Absolute URL for this route under `base_url`. A trailing slash on
    /// `base_url` is tolerated.
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Route::GetCounters => format!("{base}{BASE_PATH}/counters"),
            Route::CreateCounter { .. } | Route::DeleteCounter { .. } => {
                format!("{base}{BASE_PATH}/counter")
            }
            Route::IncreaseCounter { .. } => format!("{base}{BASE_PATH}/counter/inc"),
            Route::DecreaseCounter { .. } => format!("{base}{BASE_PATH}/counter/dec"),
        }
    }

    pub fn parameters(&self) -> Option<BTreeMap<String, String>> {
        match self {
            Route::GetCounters => None,
            Route::CreateCounter { title } => {
                Some(BTreeMap::from([(TITLE_KEY.to_string(), title.clone())]))
            }
            Route::IncreaseCounter { id }
            | Route::DecreaseCounter { id }
            | Route::DeleteCounter { id } => {
                Some(BTreeMap::from([(ID_KEY.to_string(), id.clone())]))
            }
        }
    }
}
