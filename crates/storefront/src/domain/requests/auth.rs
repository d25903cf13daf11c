use crate::domain::response::user::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Password")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "UserName")]
    pub user_name: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Password")]
    pub password: String,

    #[serde(rename = "Role")]
    pub role: Role,
}
