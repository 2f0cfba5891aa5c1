//! Prediction result cache.

use async_trait::async_trait;
use fred::pool::RedisPool;
use fred::prelude::*;

use crate::models::Prediction;
use crate::prelude::*;

/// The two operations the predictor needs from a caching backend.
///
/// Absence is strictly "key not found"; an unreadable stored value is
/// reported as absent as well, never as an error.
#[async_trait]
pub trait PredictionCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Prediction>>;

    async fn set(&self, key: &str, prediction: &Prediction) -> Result;
}

#[derive(Clone)]
pub struct RedisPredictionCache {
    redis: RedisPool,
}

impl RedisPredictionCache {
    pub fn new(redis: RedisPool) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl PredictionCache for RedisPredictionCache {
    #[instrument(skip_all, fields(key = key))]
    async fn get(&self, key: &str) -> Result<Option<Prediction>> {
        match self.redis.get::<Option<String>, _>(key).await? {
            Some(blob) => Ok(decode(key, &blob)),
            None => Ok(None),
        }
    }

    /// Stores the prediction with no expiry: the backend's own eviction
    /// policy decides how long it lives.
    #[instrument(skip_all, fields(key = key))]
    async fn set(&self, key: &str, prediction: &Prediction) -> Result {
        let blob = serde_json::to_string(prediction)?;
        debug!(size = blob.len(), "set cache");
        self.redis.set::<(), _, _>(key, blob, None, None, false).await?;
        Ok(())
    }
}

fn decode(key: &str, blob: &str) -> Option<Prediction> {
    match serde_json::from_str(blob) {
        Ok(prediction) => Some(prediction),
        Err(error) => {
            warn!(key, "discarding an unreadable cache entry: {:#}", error);
            None
        }
    }
}

#[cfg(test)]
pub use self::test::{FailingCache, MemoryCache};
