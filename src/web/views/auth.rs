use poem::handler;
use poem::web::{Data, Json};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::web::error::ApiError;
use crate::web::State;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[handler]
#[instrument(skip_all)]
pub async fn login(
    Json(request): Json<LoginRequest>,
    Data(state): Data<&State>,
) -> poem::Result<Json<LoginResponse>> {
    if !state.credentials.matches(&request.username, &request.password) {
        return Err(ApiError::BadCredentials.into());
    }
    let access_token = state.tokens.issue(&request.username)?;
    info!(username = request.username.as_str(), "logged in");
    Ok(Json(LoginResponse { access_token }))
}
