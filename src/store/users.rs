use crate::db::models::User;
use crate::db::Kv;

pub const USERS_KEY: &str = "users";

/// Read-mostly user collection. Replaced wholesale at startup; there
/// are no per-user mutations. Lookups are linear scans, which is fine
/// at seed-data scale.
pub struct UserStore {
    users: Vec<User>,
    kv: Kv,
}

impl UserStore {
    pub fn new(kv: Kv) -> Self {
        Self {
            users: Vec::new(),
            kv,
        }
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Raw persisted record for this collection, if any.
    pub(crate) fn kv_record(&self) -> crate::error::AppResult<Option<String>> {
        self.kv.get(USERS_KEY)
    }

    /// Hydrate from already-persisted state without writing it back.
    pub(crate) fn load(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Overwrite the collection and mirror it to storage.
    pub fn replace_all(&mut self, users: Vec<User>) {
        self.users = users;
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.users) {
            Ok(json) => {
                if let Err(e) = self.kv.set(USERS_KEY, &json) {
                    tracing::warn!("Failed to persist users: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize users: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Role;
    use crate::db::test_kv;

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: format!("u{id}@example.com"),
            role: Role::User,
            avatar: String::new(),
            bio: String::new(),
            followers: 0,
        }
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = UserStore::new(test_kv());
        store.replace_all(vec![user(1), user(2)]);
        assert_eq!(store.get(2).map(|u| u.id), Some(2));
        assert!(store.get(3).is_none());
    }

    #[test]
    fn replace_all_mirrors_to_storage() {
        let kv = test_kv();
        let mut store = UserStore::new(kv.clone());
        store.replace_all(vec![user(1)]);
        let json = kv.get(USERS_KEY).unwrap().unwrap();
        let back: Vec<User> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].id, 1);
    }
}
