use super::constant_time_eq;

/// Static shared-secret gate for the `api-key` header.
pub struct ApiKeyGate {
    expected: String,
}

impl ApiKeyGate {
    pub fn new(expected: impl Into<String>) -> Self {
        Self { expected: expected.into() }
    }

    pub fn matches(&self, presented: Option<&str>) -> bool {
        match presented {
            Some(presented) => constant_time_eq(presented.as_bytes(), self.expected.as_bytes()),
            None => false,
        }
    }
}
