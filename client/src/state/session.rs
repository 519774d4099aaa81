//! Session identity and role model.
//!
//! DESIGN
//! ======
//! A `Session` is created whole by the auth service and never mutated in
//! place. Role changes therefore only happen by replacing the session, which
//! keeps the role fixed for the lifetime of any one login.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role attached to an authenticated user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Patient,
    Doctor,
    Admin,
    /// Authenticated without an assigned role.
    #[default]
    None,
}

impl Role {
    /// Stable lowercase tag, `None` when no role is assigned.
    #[must_use]
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Patient => Some("patient"),
            Self::Doctor => Some("doctor"),
            Self::Admin => Some("admin"),
            Self::None => None,
        }
    }

    /// Parse a role tag. `"none"` maps to `Role::None`; unknown tags are rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "patient" => Some(Self::Patient),
            "doctor" => Some(Self::Doctor),
            "admin" => Some(Self::Admin),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Human-readable label for role pickers and profile chips.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Doctor => "Doctor",
            Self::Admin => "Admin",
            Self::None => "No role",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(tag) => serializer.serialize_str(tag),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(Self::None),
            Some(tag) => Self::parse(&tag).ok_or_else(|| D::Error::custom(format!("unknown role: {tag}"))),
        }
    }
}

/// The signed-in user as held in memory and in local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user_id: String,
    display_name: String,
    email: String,
    #[serde(default)]
    role: Role,
    #[serde(default)]
    avatar_url: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            email: email.into(),
            role,
            avatar_url,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Initials used when no avatar image is available.
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// A session is usable only if it carries a non-empty user id.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.user_id.trim().is_empty()
    }
}
