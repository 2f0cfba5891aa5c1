use poem::handler;
use poem::web::{Data, Json};

use crate::models::{CarFeatures, Prediction};
use crate::prelude::*;
use crate::web::State;

/// Authorization has already happened in [`crate::web::middleware::AuthMiddleware`]
/// by the time the body is deserialized here.
#[handler]
#[instrument(skip_all)]
pub async fn predict(
    Json(features): Json<CarFeatures>,
    Data(state): Data<&State>,
) -> poem::Result<Json<Prediction>> {
    let start_instant = Instant::now();
    let prediction = state.predictor.predict(&features).await?;
    info!(predicted_price = prediction.predicted_price, elapsed = ?start_instant.elapsed());
    Ok(Json(prediction))
}
