// src/domain/user.rs
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// The signed-in user as reported by the external auth collaborator.
/// The engine never sees credentials or tokens; "no user" is a fully
/// supported mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: UserId,
    pub username: String,
}

impl UserSession {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
