//! In-memory session oracle with demo accounts.
//!
//! Used when no service URL is configured and by the test suites. Accounts
//! and tokens live for the lifetime of the process.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use autorent_core::{Email, PhoneNumber, Role, UserId};

use super::{LoginOutcome, OracleError, Registration, SessionOracle};
use crate::models::{AccessToken, User};

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LENGTH: usize = 8;

const INVALID_CREDENTIALS: &str = "Invalid phone number or password";

/// Demo customer login: `+1 555 010 2030` / `customer-demo`.
pub const DEMO_CUSTOMER: (&str, &str) = ("+15550102030", "customer-demo");
/// Demo staff login: `+1 555 010 3040` / `staff-demo`.
pub const DEMO_STAFF: (&str, &str) = ("+15550103040", "staff-demo");
/// Demo admin login: `+1 555 010 9000` / `admin-demo`.
pub const DEMO_ADMIN: (&str, &str) = ("+15550109000", "admin-demo");

struct Account {
    user: User,
    password: SecretString,
}

#[derive(Default)]
struct Directory {
    accounts: Vec<Account>,
    tokens: HashMap<String, UserId>,
    next_id: i64,
}

/// Session oracle holding accounts and tokens in process memory.
pub struct InMemorySessionOracle {
    directory: Mutex<Directory>,
    latency: Option<Duration>,
    lookups: AtomicUsize,
}

impl Default for InMemorySessionOracle {
    fn default() -> Self {
        Self {
            directory: Mutex::new(Directory {
                next_id: 1000,
                ..Directory::default()
            }),
            latency: None,
            lookups: AtomicUsize::new(0),
        }
    }
}

impl InMemorySessionOracle {
    /// An oracle with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An oracle seeded with one customer, one staff member and one admin.
    #[must_use]
    pub fn with_demo_accounts() -> Self {
        let oracle = Self::new();
        let seeds = [
            (101, "Amara Okafor", "amara@autorent.tours", DEMO_CUSTOMER, Role::Customer),
            (201, "Jonas Berg", "jonas@autorent.tours", DEMO_STAFF, Role::Staff),
            (1, "Lena Ortiz", "lena@autorent.tours", DEMO_ADMIN, Role::Admin),
        ];
        for (id, name, email, (phone, password), role) in seeds {
            if let (Ok(phone_number), Ok(email)) =
                (PhoneNumber::parse(phone), Email::parse(email))
            {
                oracle.insert(
                    User {
                        id: UserId::new(id),
                        full_name: name.to_string(),
                        email,
                        phone_number,
                        role,
                    },
                    password,
                );
            }
        }
        oracle
    }

    /// Delay every identity lookup, simulating a slow backend.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Add an account.
    pub fn insert(&self, user: User, password: &str) {
        self.lock().accounts.push(Account {
            user,
            password: SecretString::from(password.to_string()),
        });
    }

    /// Issue a token for an existing account without a password check.
    pub fn issue_token(&self, user_id: UserId) -> AccessToken {
        let raw = format!("demo_{}", uuid::Uuid::new_v4().simple());
        self.lock().tokens.insert(raw.clone(), user_id);
        AccessToken::new(raw)
    }

    /// Number of `current_user` calls served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.directory.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Directory {
    fn find_by_phone(&self, phone: &PhoneNumber) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.user.phone_number == phone)
    }

    fn find_by_id(&self, id: UserId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.user.id == id)
    }
}

#[async_trait]
impl SessionOracle for InMemorySessionOracle {
    async fn current_user(&self, token: &AccessToken) -> Result<Option<User>, OracleError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let directory = self.lock();
        Ok(directory
            .tokens
            .get(token.expose())
            .and_then(|id| directory.find_by_id(*id))
            .map(|account| account.user.clone()))
    }

    async fn login_with_phone(
        &self,
        phone: &PhoneNumber,
        password: &SecretString,
    ) -> Result<LoginOutcome, OracleError> {
        let user = {
            let directory = self.lock();
            directory
                .find_by_phone(phone)
                .filter(|a| a.password.expose_secret() == password.expose_secret())
                .map(|a| a.user.clone())
        };

        Ok(match user {
            Some(user) => {
                let token = self.issue_token(user.id);
                LoginOutcome::success(user, token)
            }
            None => LoginOutcome::rejected(INVALID_CREDENTIALS),
        })
    }

    async fn register_with_phone(
        &self,
        registration: &Registration,
    ) -> Result<LoginOutcome, OracleError> {
        if registration.password.expose_secret().len() < MIN_PASSWORD_LENGTH {
            return Ok(LoginOutcome::rejected(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let user = {
            let mut directory = self.lock();
            if directory.find_by_phone(&registration.phone).is_some() {
                return Ok(LoginOutcome::rejected(
                    "An account with this phone number already exists",
                ));
            }
            directory.next_id += 1;
            let user = User {
                id: UserId::new(directory.next_id),
                full_name: registration.full_name.clone(),
                email: registration.email.clone(),
                phone_number: registration.phone.clone(),
                role: Role::Customer,
            };
            directory.accounts.push(Account {
                user: user.clone(),
                password: registration.password.clone(),
            });
            user
        };

        let token = self.issue_token(user.id);
        Ok(LoginOutcome::success(user, token))
    }

    async fn logout(&self, token: &AccessToken) -> Result<(), OracleError> {
        self.lock().tokens.remove(token.expose());
        Ok(())
    }
}
