use crate::auth::{ApiKeyGate, Credentials, TokenService};
use crate::opts::AuthOpts;
use crate::predictor::Predictor;
use crate::prelude::*;

/// Web application global state.
///
/// Everything in here is built once at startup and shared read-only across
/// requests; there is no other cross-request state.
#[derive(Clone)]
pub struct State {
    pub api_key: Arc<ApiKeyGate>,
    pub credentials: Arc<Credentials>,
    pub tokens: Arc<TokenService>,
    pub predictor: Arc<Predictor>,
}

impl State {
    pub fn new(opts: &AuthOpts, predictor: Predictor) -> Self {
        Self {
            api_key: Arc::new(ApiKeyGate::new(&opts.api_key)),
            credentials: Arc::new(Credentials::new(&opts.username, &opts.password)),
            tokens: Arc::new(TokenService::new(&opts.jwt_secret, opts.token_ttl)),
            predictor: Arc::new(predictor),
        }
    }
}
