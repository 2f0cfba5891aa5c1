pub use self::auth::AuthMiddleware;
pub use self::error::ErrorMiddleware;
pub use self::security_headers::SecurityHeadersMiddleware;
pub use self::sentry::SentryMiddleware;

mod auth;
mod error;
mod security_headers;
mod sentry;
