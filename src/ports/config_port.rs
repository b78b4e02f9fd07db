//! Settings access port trait.
//!
//! Lookups return `Ok(None)` when a key is absent and `Err(reason)` when it is
//! present but cannot be read as the requested type.

use std::path::PathBuf;

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, String>;
    fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>, String>;
    fn get_path(&self, section: &str, key: &str) -> Result<Option<PathBuf>, String>;
}
