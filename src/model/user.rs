use crate::model::{SiteId, UserId};
use serde::{Deserialize, Serialize};

/// Represents a person signed in to the shop-floor system.
///
/// Users are matched on email, which is unique regardless of case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub site: Option<SiteId>,
    pub is_admin: bool,
    pub is_active: bool,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub site: Option<SiteId>,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub site: Option<SiteId>,
    pub is_admin: Option<bool>,
    pub is_active: Option<bool>,
}
