//! Account roles resolved by the session oracle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a role string is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct RoleParseError(pub String);

/// Role attached to an identity.
///
/// `Staff` and `Admin` both belong to the back office; `Customer` owns the
/// customer area. `Guest` is what an identity without privileges reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Guest,
    Customer,
    Staff,
    Admin,
}

impl Role {
    /// Whether this role may use the admin area.
    #[must_use]
    pub const fn is_back_office(self) -> bool {
        matches!(self, Self::Staff | Self::Admin)
    }

    /// Human readable label for dashboards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Guest => "Guest",
            Self::Customer => "Customer",
            Self::Staff => "Staff",
            Self::Admin => "Administrator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guest => write!(f, "guest"),
            Self::Customer => write!(f, "customer"),
            Self::Staff => write!(f, "staff"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "customer" => Ok(Self::Customer),
            "staff" => Ok(Self::Staff),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_back_office_roles() {
        assert!(Role::Admin.is_back_office());
        assert!(Role::Staff.is_back_office());
        assert!(!Role::Customer.is_back_office());
        assert!(!Role::Guest.is_back_office());
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::Guest, Role::Customer, Role::Staff, Role::Admin] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_is_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"staff\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
