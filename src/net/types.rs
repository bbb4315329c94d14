//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the server's auth payloads so serde round-trips stay
//! lossless. `Role` and `AccountStatus` are closed enums: an unknown wire
//! value is a deserialization error, which callers treat the same as a
//! malformed payload rather than guessing at semantics.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role of an authenticated account, fixed at registration/approval time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Landing route for this role after login.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Teacher => "/teacher",
            Self::Student => "/student",
        }
    }

    /// Human-readable label for headers and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
        }
    }
}

/// Approval state of an account. Accounts are created `pending` and only an
/// admin moves them to `approved` or `rejected` server-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Approved,
    Rejected,
}

/// An authenticated user as returned by the `/auth/me` endpoint.
///
/// The client treats this as a read-mostly mirror of server truth; local
/// edits go through [`UserUpdate`] and are reconciled on the next refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login name, unique server-side.
    pub username: String,
    /// Contact email, unique server-side.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Account role.
    pub role: Role,
    /// Approval state.
    pub status: AccountStatus,
    /// Contact phone number, if provided.
    #[serde(default)]
    pub phone: Option<String>,
    /// Department or class affiliation, if provided.
    #[serde(default)]
    pub department: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Shallow-merge `update` into this record.
    ///
    /// Only the optional profile attributes can change; `id`, `role`, and
    /// `status` are not part of [`UserUpdate`] and therefore cannot be
    /// touched from the client.
    pub fn apply_update(&mut self, update: &UserUpdate) {
        if let Some(full_name) = &update.full_name {
            self.full_name = full_name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = Some(phone.clone());
        }
        if let Some(department) = &update.department {
            self.department = Some(department.clone());
        }
        if let Some(avatar_url) = &update.avatar_url {
            self.avatar_url = Some(avatar_url.clone());
        }
    }
}

/// Partial profile patch applied by `update_user`.
///
/// Fields left `None` are untouched by the merge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Login request body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response: bearer token plus the authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential; forwarded, never inspected.
    pub access_token: String,
    pub user: User,
}

/// Registration request body for `POST /auth/register`.
///
/// Self-service registration is limited to teacher/student roles; admin
/// accounts are provisioned server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}
