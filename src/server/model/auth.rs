use entity::user_detail::Role;
use serde::{Deserialize, Serialize};

/// Authenticated caller identity, decoded from the JWT bearer token.
///
/// Produced once at the trust boundary (encoded at login, decoded by the
/// auth guard) and passed to handlers as a typed value. Handlers never
/// inspect the raw token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Id of the authenticated user account.
    pub sub: i32,
    /// Username at the time the token was issued.
    pub username: String,
    /// Role the route layer gates on.
    pub role: Role,
    /// Expiry as a unix timestamp, validated on decode.
    pub exp: i64,
}
