//! The persisted birthdate/life-path profile.
//!
//! Exactly two entries under fixed keys, stored as text: the raw birthdate
//! string as the user typed it, and the derived life-path number. A later
//! session restores the pair without recomputation.

use log::{debug, info};

use crate::kv::{KeyValueStore, StoreError};

/// Key for the raw validated birthdate text.
pub const BIRTHDATE_KEY: &str = "calwiz_birthdate";
/// Key for the derived life-path number, stored as decimal text.
pub const LIFE_PATH_KEY: &str = "calwiz_life_path_number";

/// A restored profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub birthdate: String,
    pub life_path: u32,
}

/// Persist the validated birthdate text and its life-path number.
pub fn save_profile(
    store: &mut dyn KeyValueStore,
    birthdate: &str,
    life_path: u32,
) -> Result<(), StoreError> {
    store.set(BIRTHDATE_KEY, birthdate)?;
    store.set(LIFE_PATH_KEY, &life_path.to_string())?;
    info!("event=profile_saved life_path={life_path}");
    Ok(())
}

/// Restore the saved profile, if both entries are present and the number
/// parses. A half-written or garbled profile reads as absent.
pub fn load_profile(store: &dyn KeyValueStore) -> Option<Profile> {
    let birthdate = store.get(BIRTHDATE_KEY)?;
    let life_path = store.get(LIFE_PATH_KEY)?.parse().ok()?;
    debug!("event=profile_loaded life_path={life_path}");
    Some(Profile { birthdate, life_path })
}

/// Remove both profile entries.
pub fn clear_profile(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(BIRTHDATE_KEY)?;
    store.remove(LIFE_PATH_KEY)?;
    Ok(())
}
