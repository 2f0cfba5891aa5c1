//! Centralized error handler: every failed request leaves the service as a
//! structured JSON body, with nothing internal leaking to the client.

use poem::error::{MethodNotAllowedError, NotFoundError, ParseJsonError};
use poem::http::StatusCode;
use poem::web::Json;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};
use serde::Serialize;

use crate::prelude::*;
use crate::web::error::ApiError;

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        match self.ep.call(request).await {
            Ok(response) => Ok(response),
            Err(error) => {
                let (status, detail) = classify(&error);
                if status.is_server_error() {
                    error!(?method, ?uri, "{:#}", error);
                } else {
                    info!(?method, ?uri, "{:#}", error);
                }
                Ok((status, Json(ErrorBody { detail })).into_response())
            }
        }
    }
}

fn classify(error: &poem::Error) -> (StatusCode, String) {
    if let Some(error) = error.downcast_ref::<ApiError>() {
        (error.status(), error.to_string())
    } else if error.is::<ParseJsonError>() {
        // Body validation failure: the serde message carries the field-level
        // detail (missing field, wrong type, and so on).
        (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
    } else if error.is::<NotFoundError>() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if error.is::<MethodNotAllowedError>() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed".to_string())
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
    }
}
