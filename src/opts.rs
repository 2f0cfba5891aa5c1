//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::prelude::*;

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Opts {
    /// Sentry DSN
    #[clap(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance traces sample rate
    #[clap(long, env = "TRACES_SAMPLE_RATE", default_value = "0.0")]
    pub traces_sample_rate: f32,

    #[clap(flatten)]
    pub web: WebOpts,
}

/// Runs the web application.
#[derive(Args)]
pub struct WebOpts {
    /// Web application bind host
    #[clap(long, env = "HOST", default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[clap(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Path to the trained pricing model artifact
    #[clap(long, env = "MODEL_PATH", default_value = "models/price-model.json")]
    pub model_path: PathBuf,

    #[clap(flatten)]
    pub connections: ConnectionOpts,

    #[clap(flatten)]
    pub auth: AuthOpts,
}

#[derive(Args)]
pub struct ConnectionOpts {
    /// Redis URI
    #[clap(long, env = "REDIS_URL", default_value = "redis://localhost:6379")]
    pub redis_uri: String,

    /// Redis connection pool size
    #[clap(long, env = "REDIS_POOL_SIZE", default_value = "4", value_parser = parse_pool_size)]
    pub redis_pool_size: usize,
}

#[derive(Args)]
pub struct AuthOpts {
    /// Static API key expected in the `api-key` header
    #[clap(long, env = "API_KEY", default_value = "demo-key", hide_env_values = true)]
    pub api_key: String,

    /// Symmetric secret used to sign bearer tokens
    #[clap(long, env = "JWT_SECRET_KEY", default_value = "secret", hide_env_values = true)]
    pub jwt_secret: String,

    /// Issued bearer token lifetime
    #[clap(long, env = "TOKEN_TTL", default_value = "30m", value_parser = humantime::parse_duration)]
    pub token_ttl: StdDuration,

    /// Username accepted by `/auth/login`
    #[clap(long, env = "SERVICE_USERNAME", default_value = "admin")]
    pub username: String,

    /// Password accepted by `/auth/login`
    #[clap(long, env = "SERVICE_PASSWORD", default_value = "adminpass", hide_env_values = true)]
    pub password: String,
}

fn parse_pool_size(value: &str) -> Result<usize> {
    match value.parse()? {
        value if value >= 1 => Ok(value),
        _ => Err(anyhow!("expected a non-zero pool size")),
    }
}
