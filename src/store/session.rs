use crate::db::models::User;
use crate::db::Kv;
use crate::error::AppResult;

pub const CURRENT_USER_KEY: &str = "currentUser";

/// The single active identity. Selecting a user is the entire
/// credential check in this system; `select_user` is the seam where a
/// real one would go.
pub struct Session {
    current_user: Option<User>,
    kv: Kv,
}

impl Session {
    pub fn new(kv: Kv) -> Self {
        Self {
            current_user: None,
            kv,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn select_user(&mut self, user: User) {
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.kv.set(CURRENT_USER_KEY, &json) {
                    tracing::warn!("Failed to persist session: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
        self.current_user = Some(user);
    }

    pub fn logout(&mut self) {
        self.current_user = None;
        if let Err(e) = self.kv.remove(CURRENT_USER_KEY) {
            tracing::warn!("Failed to remove persisted session: {}", e);
        }
    }

    /// Restore the persisted identity, if any. The stored record is
    /// not re-checked against the user collection, so a user deleted
    /// from a later seed import stays logged in until logout.
    pub fn restore(&mut self) -> AppResult<()> {
        if let Some(json) = self.kv.get(CURRENT_USER_KEY)? {
            self.current_user = Some(serde_json::from_str(&json)?);
        }
        Ok(())
    }
}
