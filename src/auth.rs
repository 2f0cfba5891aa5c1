pub use self::api_key::ApiKeyGate;
pub use self::credentials::Credentials;
pub use self::token::{InvalidToken, TokenService};

mod api_key;
mod credentials;
mod token;

/// Byte-for-byte comparison whose running time does not depend on where the
/// first difference is.
fn constant_time_eq(lhs: &[u8], rhs: &[u8]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }
    lhs.iter().zip(rhs).fold(0, |acc, (lhs, rhs)| acc | (lhs ^ rhs)) == 0
}
