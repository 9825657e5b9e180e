use crate::db::models::Pin;
use crate::db::Kv;

pub const PINS_KEY: &str = "pins";

/// Ordered pin collection, most recently created first. Each mutation
/// mirrors the full collection to storage; a failed mirror write is
/// logged and the in-memory change stands.
pub struct PinStore {
    pins: Vec<Pin>,
    kv: Kv,
}

impl PinStore {
    pub fn new(kv: Kv) -> Self {
        Self {
            pins: Vec::new(),
            kv,
        }
    }

    pub fn all(&self) -> &[Pin] {
        &self.pins
    }

    pub fn get(&self, id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == id)
    }

    /// Raw persisted record for this collection, if any.
    pub(crate) fn kv_record(&self) -> crate::error::AppResult<Option<String>> {
        self.kv.get(PINS_KEY)
    }

    /// Hydrate from already-persisted state without writing it back.
    pub(crate) fn load(&mut self, pins: Vec<Pin>) {
        self.pins = pins;
    }

    /// Overwrite the collection. Caller-trusted; no validation.
    pub fn replace_all(&mut self, pins: Vec<Pin>) {
        self.pins = pins;
        self.persist();
    }

    /// Insert at the front so the newest pin displays first.
    pub fn create(&mut self, pin: Pin) {
        self.pins.insert(0, pin);
        self.persist();
    }

    /// Full-record replace by id, keeping the pin's position. Unknown
    /// ids are silently ignored.
    pub fn update(&mut self, pin: Pin) {
        if let Some(slot) = self.pins.iter_mut().find(|p| p.id == pin.id) {
            *slot = pin;
            self.persist();
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.pins.retain(|p| p.id != id);
        self.persist();
    }

    pub fn like(&mut self, id: &str) {
        if let Some(pin) = self.pins.iter_mut().find(|p| p.id == id) {
            pin.likes += 1;
            self.persist();
        }
    }

    /// Flip `user_id`'s membership in the pin's saved-by set.
    pub fn toggle_save(&mut self, id: &str, user_id: i64) {
        if let Some(pin) = self.pins.iter_mut().find(|p| p.id == id) {
            if let Some(pos) = pin.saved_by.iter().position(|&u| u == user_id) {
                pin.saved_by.remove(pos);
            } else {
                pin.saved_by.push(user_id);
            }
            self.persist();
        }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.pins) {
            Ok(json) => {
                if let Err(e) = self.kv.set(PINS_KEY, &json) {
                    tracing::warn!("Failed to persist pins: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize pins: {}", e),
        }
    }
}
