//! The request-to-prediction pipeline: cache key, cache lookup, model
//! invocation, cache populate.

pub use self::model::PriceModel;

pub mod model;

use crate::cache::PredictionCache;
use crate::models::{CarFeatures, Prediction};
use crate::prelude::*;
use crate::redis::CacheKey;

pub struct Predictor {
    model: PriceModel,
    cache: Arc<dyn PredictionCache>,
}

impl Predictor {
    pub fn new(model: PriceModel, cache: Arc<dyn PredictionCache>) -> Self {
        Self { model, cache }
    }

    /// Returns the cached prediction for these features, or computes and
    /// caches one. A broken or unreachable cache never fails the request:
    /// the predictor falls through to the model and serves the result anyway.
    #[instrument(skip_all)]
    pub async fn predict(&self, features: &CarFeatures) -> Result<Prediction> {
        let cache_key = features.cache_key();

        match self.cache.get(&cache_key).await {
            Ok(Some(prediction)) => {
                debug!(cache_key = cache_key.as_str(), "cache hit");
                return Ok(prediction);
            }
            Ok(None) => {}
            Err(error) => {
                warn!("cache read failed, computing directly: {:#}", error);
            }
        }

        let predicted_price = self.model.predict(features)?;
        let prediction = Prediction { predicted_price };

        if let Err(error) = self.cache.set(&cache_key, &prediction).await {
            warn!("failed to cache the prediction: {:#}", error);
        }
        Ok(prediction)
    }
}
