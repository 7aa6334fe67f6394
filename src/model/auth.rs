use entity::user_detail::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload returned on a successful login: the bearer token plus a summary
/// of the authenticated account.
#[derive(Debug, Serialize)]
pub struct LoginDto {
    pub token: String,
    pub user: LoginUserDto,
}

#[derive(Debug, Serialize)]
pub struct LoginUserDto {
    pub id: i32,
    pub username: String,
    pub role: Role,
}
