//! String key-value persistence and the saved birthdate/life-path profile.
//!
//! The store is an explicit capability injected into callers, never ambient
//! global state. Two backends: an in-memory map for tests and demos, and a
//! single JSON object file for persistence across runs.

pub mod kv;
pub mod profile;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use profile::{BIRTHDATE_KEY, LIFE_PATH_KEY, Profile, clear_profile, load_profile, save_profile};
