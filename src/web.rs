use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

pub use self::state::State;
use self::middleware::{AuthMiddleware, ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware};
use crate::cache::RedisPredictionCache;
use crate::opts::WebOpts;
use crate::predictor::{PriceModel, Predictor};
use crate::prelude::*;

pub mod error;
pub mod middleware;
mod state;
mod views;

#[cfg(test)]
mod tests;

pub async fn run(opts: WebOpts) -> Result {
    let model = PriceModel::load(&opts.model_path)?;
    let redis =
        crate::redis::connect(&opts.connections.redis_uri, opts.connections.redis_pool_size)
            .await?;
    let cache = Arc::new(RedisPredictionCache::new(redis));
    let state = State::new(&opts.auth, Predictor::new(model, cache));

    let app = create_app(state);
    info!(host = opts.host.as_str(), port = opts.port, "listening");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(app, shutdown_signal(), None)
        .await?;
    Ok(())
}

pub fn create_app(state: State) -> impl Endpoint {
    Route::new()
        .at("/auth/login", post(views::auth::login))
        .at("/api/predict", post(views::predict::predict).with(AuthMiddleware))
        .at("/api/health", get(views::health::get_health))
        .data(state)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("failed to listen for the shutdown signal: {:#}", error);
    }
}
