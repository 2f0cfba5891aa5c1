use poem::http::StatusCode;
use thiserror::Error;

/// Errors the API deliberately shows to clients.
///
/// Authentication failures are uniform: the detail never says whether the
/// API key or the token was at fault, nor why the token was rejected.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid authentication credentials")]
    Unauthorized,

    #[error("incorrect username or password")]
    BadCredentials,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::BadCredentials => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<ApiError> for poem::Error {
    fn from(error: ApiError) -> Self {
        let status = error.status();
        Self::new(error, status)
    }
}
