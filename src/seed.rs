use serde::Deserialize;

use crate::db::models::{Pin, User};
use crate::error::AppResult;

const SEED_JSON: &str = include_str!("seed.json");

/// Bundled first-run dataset: two selectable demo users and an empty
/// pin collection. Persisted verbatim the first time the store opens.
#[derive(Debug, Deserialize)]
pub struct SeedData {
    pub users: Vec<User>,
    pub pins: Vec<Pin>,
}

pub fn load() -> AppResult<SeedData> {
    Ok(serde_json::from_str(SEED_JSON)?)
}
