//! Session registry - One active session per user.
//!
//! Tracking "logged in somewhere" as a boolean column on the user row
//! outlives crashes and strands users behind a stale flag. The rule lives in
//! an in-process registry instead: login registers the user, a second login
//! is refused while the first session exists, and logout (or a process
//! restart) releases it. The registry is separate from the checkout core,
//! which only ever receives an already-authenticated buyer id.

use crate::{
    core::user::{Role, authenticate},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

/// A live session for one user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    /// The logged-in user
    pub user_id: i64,
    /// Role captured at login, for route guards in the calling layer
    pub role: Role,
    /// When the session was opened
    pub started_at: chrono::DateTime<chrono::Utc>,
}

/// In-process registry of active sessions, keyed by user id.
///
/// Shared across request handlers behind an `Arc`; the interior `RwLock`
/// keeps lookups cheap while logins and logouts take the write lock.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<i64, Session>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session for a user, refusing if one is already active.
    ///
    /// # Errors
    /// Returns [`Error::SessionActive`] when the user is already logged in
    /// on another device.
    pub async fn register(&self, user_id: i64, role: Role) -> Result<Session> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&user_id) {
            return Err(Error::SessionActive { user_id });
        }

        let session = Session {
            user_id,
            role,
            started_at: chrono::Utc::now(),
        };
        sessions.insert(user_id, session);
        Ok(session)
    }

    /// Closes a user's session. Returns false if none was active.
    pub async fn revoke(&self, user_id: i64) -> bool {
        self.sessions.write().await.remove(&user_id).is_some()
    }

    /// Looks up the active session for a user, if any.
    pub async fn get(&self, user_id: i64) -> Option<Session> {
        self.sessions.read().await.get(&user_id).copied()
    }

    /// Whether the user currently holds a session.
    pub async fn is_active(&self, user_id: i64) -> bool {
        self.sessions.read().await.contains_key(&user_id)
    }
}

/// Authenticates an email/password pair and opens a session.
///
/// # Errors
/// [`Error::InvalidCredentials`] for a bad pair, [`Error::SessionActive`]
/// when the account is already logged in elsewhere.
pub async fn login(
    db: &DatabaseConnection,
    registry: &SessionRegistry,
    email: &str,
    password: &str,
) -> Result<Session> {
    let user = authenticate(db, email, password).await?;
    let role = Role::parse(&user.role)?;
    let session = registry.register(user.id, role).await?;
    info!(user_id = user.id, "session opened");
    Ok(session)
}

/// Closes the session for a user id. Returns false if none was active.
pub async fn logout(registry: &SessionRegistry, user_id: i64) -> bool {
    let revoked = registry.revoke(user_id).await;
    if revoked {
        info!(user_id, "session closed");
    }
    revoked
}
