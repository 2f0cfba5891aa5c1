//! Car price prediction API.

use clap::Parser;

use crate::opts::Opts;
use crate::prelude::*;

mod auth;
mod cache;
mod logging;
mod models;
mod opts;
mod predictor;
mod prelude;
mod redis;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = logging::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting up…");
    web::run(opts.web).await
}
