use std::time::Duration;

use futures::future::BoxFuture;
use rand::Rng;
use reqwest::{
    header::USER_AGENT,
    Client,
};
use serde::Deserialize;
use tracing::debug;

use super::{
    ensure_positive,
    validate_batch,
    ImageSource,
};
use crate::core::{
    Card,
    SwipeError,
};

/// Upper bound for the random listing offset, keeps batches varied between sessions.
const MAX_SKIP: u32 = 1000;

#[derive(Debug, Deserialize)]
struct CatRecord {
    #[serde(alias = "_id")]
    id: String,
}

/// Lists cat ids from the Cataas JSON API and points each card at `/cat/{id}`.
pub struct CataasApiSource {
    client: Client,
    base_url: String,
}

impl CataasApiSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SwipeError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SwipeError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    async fn list_cats(&self, count: usize, skip: u32) -> Result<Vec<Card>, SwipeError> {
        ensure_positive(count)?;

        let url = format!("{}/api/cats", self.base_url);
        debug!(%url, count, skip, "Listing cats");

        let response = self
            .client
            .get(&url)
            .query(&[("limit", count.to_string()), ("skip", skip.to_string())])
            .header(USER_AGENT, "pawswipe/0.1 (+reqwest)")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SwipeError::Custom(format!(
                "HTTP error {} from {}",
                response.status(),
                response.url()
            )));
        }

        let records: Vec<CatRecord> = response.json().await?;
        let cards = records
            .into_iter()
            .map(|record| {
                let image_url = format!("{}/cat/{}", self.base_url, record.id);
                Card::new(record.id, image_url)
            })
            .collect();

        validate_batch(count, cards)
    }
}

impl ImageSource for CataasApiSource {
    fn name(&self) -> &'static str {
        "cataas_api"
    }

    fn fetch_batch(&self, count: usize) -> BoxFuture<'_, Result<Vec<Card>, SwipeError>> {
        let skip = rand::rng().random_range(0..MAX_SKIP);
        Box::pin(self.list_cats(count, skip))
    }
}
