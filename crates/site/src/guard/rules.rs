//! The access decision table.
//!
//! Rules are evaluated in order and the first match decides. Precedence is
//! loading, then unauthenticated, then role mismatch, then area mismatch,
//! then allow.

use crate::models::user::{ADMIN_HOME, CUSTOMER_HOME, LOGIN_PATH};
use crate::models::User;
use crate::services::is_admin;

/// Which part of the site a guarded router serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteArea {
    Customer,
    Admin,
}

/// Guard configuration declared by each guarded router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardPolicy {
    pub require_admin: bool,
    pub area: RouteArea,
}

impl GuardPolicy {
    /// Policy of the `/customer/*` subtree.
    pub const CUSTOMER: Self = Self {
        require_admin: false,
        area: RouteArea::Customer,
    };

    /// Policy of the `/admin/*` subtree.
    pub const ADMIN: Self = Self {
        require_admin: true,
        area: RouteArea::Admin,
    };
}

/// State of the session lookup for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLookup {
    /// The oracle has not answered yet.
    Pending,
    /// The oracle answered; `None` means no identity.
    Resolved(Option<User>),
    /// The oracle could not be asked or gave an unusable answer.
    Failed,
}

/// Outcome of the guard for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the loading placeholder.
    Loading,
    /// Redirect with 303 to the given path.
    RedirectTo(&'static str),
    /// Run the guarded handler.
    Allow,
}

type Rule = fn(&SessionLookup, GuardPolicy) -> Option<GuardDecision>;

const RULES: &[Rule] = &[
    still_loading,
    unauthenticated,
    role_mismatch,
    area_mismatch,
];

fn still_loading(lookup: &SessionLookup, _: GuardPolicy) -> Option<GuardDecision> {
    matches!(lookup, SessionLookup::Pending).then_some(GuardDecision::Loading)
}

fn unauthenticated(lookup: &SessionLookup, _: GuardPolicy) -> Option<GuardDecision> {
    matches!(lookup, SessionLookup::Resolved(None) | SessionLookup::Failed)
        .then_some(GuardDecision::RedirectTo(LOGIN_PATH))
}

fn role_mismatch(lookup: &SessionLookup, policy: GuardPolicy) -> Option<GuardDecision> {
    let SessionLookup::Resolved(Some(user)) = lookup else {
        return None;
    };
    (policy.require_admin && !is_admin(Some(user)))
        .then_some(GuardDecision::RedirectTo(CUSTOMER_HOME))
}

fn area_mismatch(lookup: &SessionLookup, policy: GuardPolicy) -> Option<GuardDecision> {
    let SessionLookup::Resolved(Some(user)) = lookup else {
        return None;
    };
    (!policy.require_admin && is_admin(Some(user)) && policy.area == RouteArea::Customer)
        .then_some(GuardDecision::RedirectTo(ADMIN_HOME))
}

/// Decide what to do with a guarded request.
#[must_use]
pub fn evaluate(lookup: &SessionLookup, policy: GuardPolicy) -> GuardDecision {
    RULES
        .iter()
        .find_map(|rule| rule(lookup, policy))
        .unwrap_or(GuardDecision::Allow)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use autorent_core::{Email, PhoneNumber, Role, UserId};

    use super::*;

    const ALL_POLICIES: [GuardPolicy; 4] = [
        GuardPolicy::CUSTOMER,
        GuardPolicy::ADMIN,
        GuardPolicy {
            require_admin: false,
            area: RouteArea::Admin,
        },
        GuardPolicy {
            require_admin: true,
            area: RouteArea::Customer,
        },
    ];

    fn signed_in(role: Role) -> SessionLookup {
        SessionLookup::Resolved(Some(User {
            id: UserId::new(1),
            full_name: "Test User".to_string(),
            email: Email::parse("test@autorent.tours").unwrap(),
            phone_number: PhoneNumber::parse("+15550000001").unwrap(),
            role,
        }))
    }

    #[test]
    fn test_pending_lookup_shows_loading() {
        for policy in ALL_POLICIES {
            assert_eq!(evaluate(&SessionLookup::Pending, policy), GuardDecision::Loading);
        }
    }

    #[test]
    fn test_no_identity_redirects_to_login() {
        for policy in ALL_POLICIES {
            assert_eq!(
                evaluate(&SessionLookup::Resolved(None), policy),
                GuardDecision::RedirectTo("/login")
            );
        }
    }

    #[test]
    fn test_failed_lookup_fails_closed() {
        for policy in ALL_POLICIES {
            assert_eq!(
                evaluate(&SessionLookup::Failed, policy),
                GuardDecision::RedirectTo("/login")
            );
        }
    }

    #[test]
    fn test_customer_on_admin_route_goes_to_customer_dashboard() {
        assert_eq!(
            evaluate(&signed_in(Role::Customer), GuardPolicy::ADMIN),
            GuardDecision::RedirectTo("/customer/dashboard")
        );
    }

    #[test]
    fn test_guest_role_cannot_enter_admin_area() {
        assert_eq!(
            evaluate(&signed_in(Role::Guest), GuardPolicy::ADMIN),
            GuardDecision::RedirectTo("/customer/dashboard")
        );
    }

    #[test]
    fn test_back_office_on_customer_route_goes_to_admin_dashboard() {
        for role in [Role::Admin, Role::Staff] {
            assert_eq!(
                evaluate(&signed_in(role), GuardPolicy::CUSTOMER),
                GuardDecision::RedirectTo("/admin/dashboard")
            );
        }
    }

    #[test]
    fn test_allowed_combinations() {
        assert_eq!(
            evaluate(&signed_in(Role::Customer), GuardPolicy::CUSTOMER),
            GuardDecision::Allow
        );
        for role in [Role::Admin, Role::Staff] {
            assert_eq!(evaluate(&signed_in(role), GuardPolicy::ADMIN), GuardDecision::Allow);
        }
    }

    #[test]
    fn test_area_rule_only_applies_to_customer_area() {
        let policy = GuardPolicy {
            require_admin: false,
            area: RouteArea::Admin,
        };
        assert_eq!(evaluate(&signed_in(Role::Staff), policy), GuardDecision::Allow);
        assert_eq!(evaluate(&signed_in(Role::Customer), policy), GuardDecision::Allow);
    }

    #[test]
    fn test_role_rule_precedes_area_rule() {
        let policy = GuardPolicy {
            require_admin: true,
            area: RouteArea::Customer,
        };
        assert_eq!(
            evaluate(&signed_in(Role::Customer), policy),
            GuardDecision::RedirectTo("/customer/dashboard")
        );
        assert_eq!(evaluate(&signed_in(Role::Admin), policy), GuardDecision::Allow);
    }
}
