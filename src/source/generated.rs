use chrono::Utc;
use futures::future::BoxFuture;

use super::{
    ensure_positive,
    validate_batch,
    ImageSource,
};
use crate::core::{
    Card,
    SwipeError,
};

/// Synthesizes cache-busting `/cat?...` URLs, one random cat per card.
///
/// No request is made here; the image loaders hit the network when the card is drawn.
pub struct GeneratedSource {
    base_url: String,
}

impl GeneratedSource {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn batch_at(&self, timestamp: i64, count: usize) -> Vec<Card> {
        (0..count)
            .map(|i| {
                Card::new(
                    format!("cat-{}-{}", timestamp, i),
                    format!("{}/cat?{}{}", self.base_url, timestamp, i),
                )
            })
            .collect()
    }
}

impl ImageSource for GeneratedSource {
    fn name(&self) -> &'static str {
        "generated"
    }

    fn fetch_batch(&self, count: usize) -> BoxFuture<'_, Result<Vec<Card>, SwipeError>> {
        Box::pin(async move {
            ensure_positive(count)?;
            let timestamp = Utc::now().timestamp_millis();
            validate_batch(count, self.batch_at(timestamp, count))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_ids_and_urls_from_timestamp() {
        let source = GeneratedSource::new("https://cataas.com/");
        let cards = source.batch_at(1700, 3);

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], Card::new("cat-1700-0", "https://cataas.com/cat?17000"));
        assert_eq!(cards[2].image_url, "https://cataas.com/cat?17002");
    }

    #[tokio::test]
    async fn fetch_returns_requested_count() {
        let source = GeneratedSource::new("https://cataas.com");
        let cards = source.fetch_batch(10).await.unwrap();
        assert_eq!(cards.len(), 10);
    }

    #[tokio::test]
    async fn zero_count_is_rejected() {
        let source = GeneratedSource::new("https://cataas.com");
        assert!(matches!(source.fetch_batch(0).await, Err(SwipeError::InvalidBatch(_))));
    }
}
