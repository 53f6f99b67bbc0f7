//! Repository over the Counters API.
//!
//! # Design
//! `CounterStore` pairs an [`HttpClient`] with the [`Route`] table. The API
//! answers every operation — including mutations — with the full counter
//! list, so each method decodes `Vec<Counter>`.

use crate::client::HttpClient;
use crate::error::Error;
use crate::routes::Route;
use crate::transport::Transport;
use crate::types::Counter;

/// Typed access to the Counters API at one base URL.
#[derive(Debug, Clone)]
pub struct CounterStore<T> {
    base_url: String,
    client: HttpClient<T>,
}

impl<T: Transport> CounterStore<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: HttpClient::new(transport),
        }
    }

    pub async fn fetch(&self) -> Result<Vec<Counter>, Error> {
        self.call(Route::GetCounters).await
    }

    pub async fn create(&self, title: &str) -> Result<Vec<Counter>, Error> {
        self.call(Route::CreateCounter {
            title: title.to_string(),
        })
        .await
    }

    pub async fn increase(&self, id: &str) -> Result<Vec<Counter>, Error> {
        self.call(Route::IncreaseCounter { id: id.to_string() }).await
    }

    pub async fn decrease(&self, id: &str) -> Result<Vec<Counter>, Error> {
        self.call(Route::DecreaseCounter { id: id.to_string() }).await
    }

    pub async fn delete(&self, id: &str) -> Result<Vec<Counter>, Error> {
        self.call(Route::DeleteCounter { id: id.to_string() }).await
    }

    async fn call(&self, route: Route) -> Result<Vec<Counter>, Error> {
        let value = self
            .client
            .send_json(
                &route.url(&self.base_url),
                route.method(),
                route.parameters().as_ref(),
            )
            .await?;
        serde_json::from_value(value).map_err(|e| Error::Decode(e.to_string()))
    }
}
