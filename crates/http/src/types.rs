//! Wire types for the backend API

use serde::{Deserialize, Serialize};

/// Response of `GET /users/jwtToken`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetailsResponse {
    /// Opaque user details issued by the backend
    pub user_details: serde_json::Value,
}
