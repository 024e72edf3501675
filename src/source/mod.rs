//! Where cards come from.

pub mod cataas;
pub mod generated;

use std::{
    collections::HashSet,
    sync::Arc,
};

use futures::future::BoxFuture;

pub use cataas::CataasApiSource;
pub use generated::GeneratedSource;

use crate::{
    core::{
        Card,
        SwipeError,
    },
    settings::{
        SourceKind,
        SwipeSettings,
    },
};

/// Produces a batch of exactly `count` cards with unique ids.
pub trait ImageSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn fetch_batch(&self, count: usize) -> BoxFuture<'_, Result<Vec<Card>, SwipeError>>;
}

pub fn build_source(settings: &SwipeSettings) -> Result<Arc<dyn ImageSource>, SwipeError> {
    let source: Arc<dyn ImageSource> = match settings.source {
        SourceKind::Generated => Arc::new(GeneratedSource::new(&settings.base_url)),
        SourceKind::CataasApi => {
            Arc::new(CataasApiSource::new(&settings.base_url, settings.fetch_timeout())?)
        }
    };
    Ok(source)
}

/// Checks a batch against the fetch contract before it reaches the session.
pub fn validate_batch(count: usize, cards: Vec<Card>) -> Result<Vec<Card>, SwipeError> {
    if cards.len() != count {
        return Err(SwipeError::InvalidBatch(format!(
            "expected {} cats, got {}",
            count,
            cards.len()
        )));
    }

    let duplicate = {
        let mut seen = HashSet::new();
        cards.iter().find(|card| !seen.insert(card.id.as_str())).map(|card| card.id.clone())
    };
    if let Some(id) = duplicate {
        return Err(SwipeError::InvalidBatch(format!("duplicate cat id {}", id)));
    }

    Ok(cards)
}

fn ensure_positive(count: usize) -> Result<(), SwipeError> {
    if count == 0 {
        return Err(SwipeError::InvalidBatch("batch size must be positive".to_string()));
    }
    Ok(())
}
