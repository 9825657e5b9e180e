pub mod filter;
pub mod pins;
pub mod session;
pub mod users;

use std::collections::BTreeSet;

use crate::db::models::{Pin, User};
use crate::db::Kv;
use crate::error::{AppError, AppResult};
use crate::seed;
use crate::view;

use self::filter::Filter;
use self::pins::PinStore;
use self::session::Session;
use self::users::UserStore;

/// Fields an admin supplies when creating a pin; the store fills in
/// the id, owner, counters, and timestamp.
#[derive(Debug, Clone)]
pub struct PinDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
}

/// Optional replacement fields for an admin edit; `None` keeps the
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct PinPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// The application state container. Owns the entity collections, the
/// session, and the transient filter state; the presentation layer
/// holds a reference to this and never touches the collections
/// directly.
pub struct AppStore {
    users: UserStore,
    pins: PinStore,
    session: Session,
    filter: Filter,
}

impl AppStore {
    /// Open the store against the given key-value backend: hydrate
    /// persisted collections, seed the bundled dataset for any that
    /// are missing, and restore the session if one was left behind.
    /// Malformed persisted JSON is fatal here.
    pub fn open(kv: Kv) -> AppResult<Self> {
        let mut users = UserStore::new(kv.clone());
        let mut pins = PinStore::new(kv.clone());
        let mut session = Session::new(kv);

        match users.kv_record()? {
            Some(json) => users.load(serde_json::from_str(&json)?),
            None => {
                tracing::info!("No persisted users, loading seed dataset");
                users.replace_all(seed::load()?.users);
            }
        }

        match pins.kv_record()? {
            Some(json) => pins.load(serde_json::from_str(&json)?),
            None => {
                tracing::info!("No persisted pins, loading seed dataset");
                pins.replace_all(seed::load()?.pins);
            }
        }

        session.restore()?;

        Ok(Self {
            users,
            pins,
            session,
            filter: Filter::default(),
        })
    }

    // ---- Read-only snapshot accessors ----

    pub fn users(&self) -> &[User] {
        self.users.all()
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.get(id)
    }

    pub fn pins(&self) -> &[Pin] {
        self.pins.all()
    }

    pub fn pin(&self, id: &str) -> Option<&Pin> {
        self.pins.get(id)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Pins matching the current filter, newest first.
    pub fn visible_pins(&self) -> Vec<&Pin> {
        view::visible_pins(self.pins.all(), &self.filter)
    }

    /// Every tag in use, deduplicated.
    pub fn available_tags(&self) -> BTreeSet<String> {
        view::available_tags(self.pins.all())
    }

    /// Pins authored by the given user, newest first.
    pub fn authored_pins(&self, user_id: i64) -> Vec<&Pin> {
        view::pins_by_author(self.pins.all(), user_id)
    }

    /// Pins the given user has saved, newest first.
    pub fn saved_pins(&self, user_id: i64) -> Vec<&Pin> {
        view::pins_saved_by(self.pins.all(), user_id)
    }

    // ---- Session ----

    /// Select an identity by id. Selecting is authenticating here;
    /// this is the seam a credential check would replace.
    pub fn login(&mut self, user_id: i64) -> AppResult<User> {
        let user = self
            .users
            .get(user_id)
            .cloned()
            .ok_or(AppError::NotFound)?;
        self.session.select_user(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    // ---- Entity mutations ----

    /// Admin-only. Builds the full record from the draft and inserts
    /// it at the front of the collection.
    pub fn create_pin(&mut self, draft: PinDraft) -> AppResult<Pin> {
        let owner = self.require_admin()?.id;
        let pin = Pin {
            id: uuid::Uuid::now_v7().to_string(),
            user_id: owner,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            tags: draft.tags,
            likes: 0,
            saved_by: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.pins.create(pin.clone());
        Ok(pin)
    }

    /// Admin-only full-record replace; unknown ids are a silent no-op.
    pub fn update_pin(&mut self, pin: Pin) -> AppResult<()> {
        self.require_admin()?;
        self.pins.update(pin);
        Ok(())
    }

    /// Admin-only. Merges the patch over the stored record, keeping
    /// unpatched fields. The gate runs before the lookup, so non-admins
    /// are rejected whether or not the id resolves; for admins an
    /// unknown id is the usual silent no-op, reported as `None`.
    pub fn edit_pin(&mut self, id: &str, patch: PinPatch) -> AppResult<Option<Pin>> {
        self.require_admin()?;
        let Some(mut pin) = self.pins.get(id).cloned() else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            pin.title = title;
        }
        if let Some(description) = patch.description {
            pin.description = description;
        }
        if let Some(image_url) = patch.image_url {
            pin.image_url = image_url;
        }
        if let Some(tags) = patch.tags {
            pin.tags = tags;
        }
        self.pins.update(pin.clone());
        Ok(Some(pin))
    }

    /// Admin-only; unknown ids are a silent no-op.
    pub fn delete_pin(&mut self, id: &str) -> AppResult<()> {
        self.require_admin()?;
        self.pins.delete(id);
        Ok(())
    }

    /// Open to everyone; unknown ids are a silent no-op.
    pub fn like_pin(&mut self, id: &str) {
        self.pins.like(id);
    }

    /// Flip the active user's membership in the pin's saved-by set.
    pub fn toggle_save(&mut self, id: &str) -> AppResult<()> {
        let user_id = self.require_user()?.id;
        self.pins.toggle_save(id, user_id);
        Ok(())
    }

    // ---- Filter ----

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.set_search_text(text);
    }

    pub fn toggle_tag_filter(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    // ---- Role gate ----

    fn require_user(&self) -> AppResult<&User> {
        self.session.current_user().ok_or(AppError::Unauthorized)
    }

    /// Advisory only: there is no server behind this check.
    fn require_admin(&self) -> AppResult<&User> {
        let user = self.require_user()?;
        if user.is_admin() {
            Ok(user)
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
