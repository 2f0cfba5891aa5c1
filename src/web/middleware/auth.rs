//! Two-factor request authorization: the static API key gate first, then the
//! bearer token. Runs before the body is even looked at, so an
//! unauthenticated request is rejected with 401 no matter what it carries.

use poem::{Endpoint, Middleware, Request, Result};

use crate::prelude::*;
use crate::web::error::ApiError;
use crate::web::State;

pub struct AuthMiddleware;

impl<E: Endpoint> Middleware<E> for AuthMiddleware {
    type Output = AuthMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        AuthMiddlewareImpl { ep }
    }
}

pub struct AuthMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for AuthMiddlewareImpl<E> {
    type Output = E::Output;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let state = request
            .extensions()
            .get::<State>()
            .ok_or_else(|| anyhow!("the application state is not attached"))?;
        let identity = authenticate(&request, state)?;
        debug!(identity = identity.as_str(), "authenticated");
        self.ep.call(request).await
    }
}

fn authenticate(request: &Request, state: &State) -> Result<String, poem::Error> {
    if !state.api_key.matches(request.header("api-key")) {
        return Err(ApiError::Unauthorized.into());
    }
    let token = bearer_token(request).ok_or(ApiError::Unauthorized)?;
    match state.tokens.verify(token) {
        Ok(identity) => Ok(identity),
        Err(_) => Err(ApiError::Unauthorized.into()),
    }
}

/// The token is taken from the `token` header, with the standard
/// `Authorization: Bearer` form accepted as well.
fn bearer_token(request: &Request) -> Option<&str> {
    if let Some(token) = request.header("token") {
        return Some(token);
    }
    request.header("authorization").and_then(|header| header.strip_prefix("Bearer "))
}
