//! INI settings adapter for `percentile_export.ini`.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::{Path, PathBuf};

pub struct FileConfigAdapter {
    ini: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let mut ini = Ini::new();
        ini.load(path)?;
        Ok(Self { ini })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut ini = Ini::new();
        ini.read(content.to_string())?;
        Ok(Self { ini })
    }

    /// Trimmed value; a key written without a value reads as `""`.
    fn raw(&self, section: &str, key: &str) -> Option<String> {
        if let Some(value) = self.ini.get(section, key) {
            return Some(value.trim().to_string());
        }
        // configparser may store a key without a value as `None`
        self.ini
            .get_map_ref()
            .get(section)
            .is_some_and(|entries| entries.contains_key(key))
            .then(String::new)
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.raw(section, key).filter(|v| !v.is_empty())
    }

    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, String> {
        self.raw(section, key)
            .map(|v| {
                v.parse::<i64>()
                    .map_err(|_| format!("expected an integer, got {v:?}"))
            })
            .transpose()
    }

    fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>, String> {
        self.raw(section, key)
            .map(|v| match v.to_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(true),
                "false" | "no" | "0" => Ok(false),
                _ => Err(format!("expected true/false, yes/no or 1/0, got {v:?}")),
            })
            .transpose()
    }

    fn get_path(&self, section: &str, key: &str) -> Result<Option<PathBuf>, String> {
        match self.raw(section, key) {
            None => Ok(None),
            Some(v) if v.is_empty() => Err("path must not be empty".to_string()),
            Some(v) => Ok(Some(PathBuf::from(v))),
        }
    }
}
