//! Auth Requests
//!
//! Login, registration, and bearer-token identity resolution.

use resource_sync::SyncResult;
use serde::{Deserialize, Serialize};

use crate::models::UserIdentity;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterArgs {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserIdentity,
}

#[derive(Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ========================
// Requests
// ========================

pub async fn login(args: LoginArgs) -> SyncResult<LoginResponse> {
    super::post_json("/login", &args).await
}

pub async fn register(args: RegisterArgs) -> SyncResult<MessageResponse> {
    super::post_json("/register", &args).await
}

/// Exchange the stored token for the user identity; 401 maps to
/// `SyncError::Unauthenticated`
pub async fn current_user(token: &str) -> SyncResult<UserIdentity> {
    super::get_json_auth("/user", token).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_response_surfaces_server_message() {
        let raw = json!({ "message": "User registered successfully" });
        let resp: MessageResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.message, "User registered successfully");
    }
}
