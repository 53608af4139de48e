//! Identity types.
//!
//! The session oracle owns users; the site only ever holds a copy for the
//! duration of one request.

use serde::{Deserialize, Serialize};

use autorent_core::{Email, PhoneNumber, Role, UserId};

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";
/// Landing page of the customer area.
pub const CUSTOMER_HOME: &str = "/customer/dashboard";
/// Landing page of the admin area.
pub const ADMIN_HOME: &str = "/admin/dashboard";

/// An identity resolved by the session oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the service layer.
    pub id: UserId,
    /// Full name as entered at registration.
    pub full_name: String,
    /// Contact email address.
    pub email: Email,
    /// Login phone number.
    pub phone_number: PhoneNumber,
    /// Role deciding which area the user belongs to.
    pub role: Role,
}

impl User {
    /// First word of the full name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.full_name)
    }

    /// Dashboard this user lands on after login.
    #[must_use]
    pub const fn home_path(&self) -> &'static str {
        if self.role.is_back_office() {
            ADMIN_HOME
        } else {
            CUSTOMER_HOME
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: UserId::new(1),
            full_name: "Amara Okafor".to_string(),
            email: Email::parse("amara@autorent.tours").unwrap(),
            phone_number: PhoneNumber::parse("+1 555 010 2030").unwrap(),
            role,
        }
    }

    #[test]
    fn test_home_path_by_role() {
        assert_eq!(user(Role::Customer).home_path(), CUSTOMER_HOME);
        assert_eq!(user(Role::Staff).home_path(), ADMIN_HOME);
        assert_eq!(user(Role::Admin).home_path(), ADMIN_HOME);
    }

    #[test]
    fn test_first_name() {
        assert_eq!(user(Role::Customer).first_name(), "Amara");
    }

    #[test]
    fn test_deserialize_from_service_payload() {
        let json = r#"{
            "id": 12,
            "full_name": "Jonas Berg",
            "email": "jonas@example.org",
            "phone_number": "+4670123456",
            "role": "staff"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Staff);
        assert_eq!(user.phone_number.as_str(), "+4670123456");
        assert_eq!(user.email.as_str(), "jonas@example.org");
    }
}
