use super::constant_time_eq;

/// The one login accepted by `/auth/login`.
///
/// A real deployment would plug a user store in behind this seam; the service
/// itself only ever asks "does this username/password pair check out".
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && constant_time_eq(password.as_bytes(), self.password.as_bytes())
    }
}
