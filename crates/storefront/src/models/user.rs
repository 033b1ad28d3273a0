//! Current-user record.
//!
//! Written by the external auth flow; this crate only reads and clears it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use villa_markets_core::UserRole;

/// The signed-in user, when a session exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "rol")]
    pub role: UserRole,
    /// Store the user owns or manages, when applicable.
    #[serde(rename = "minimarket", default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    #[serde(
        rename = "ultimoAcceso",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_access: Option<NaiveDateTime>,
}

impl CurrentUser {
    /// Whether this user may manage the catalog.
    #[must_use]
    pub const fn can_manage_catalog(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::Owner)
    }
}
