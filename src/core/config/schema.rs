//! core::config::schema
//!
//! Settings schema.
//!
//! # Keys
//!
//! | Key            | Default       |
//! |----------------|---------------|
//! | `PROJECT_NAME` | `"Store API"` |
//! | `ROOT_PATH`    | `"/"`         |
//! | `DATABASE_URL` | required      |
//!
//! Keys are matched case-insensitively against both the environment and
//! the override file.

use std::collections::HashMap;

use super::ConfigError;

pub const PROJECT_NAME: &str = "PROJECT_NAME";
pub const ROOT_PATH: &str = "ROOT_PATH";
pub const DATABASE_URL: &str = "DATABASE_URL";

pub const DEFAULT_PROJECT_NAME: &str = "Store API";
pub const DEFAULT_ROOT_PATH: &str = "/";

/// A single settings key and its default, if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub default: Option<&'static str>,
    /// Values of secret fields are never logged.
    pub secret: bool,
}

/// Every field `Settings` understands.
pub static FIELDS: [Field; 3] = [
    Field {
        key: PROJECT_NAME,
        default: Some(DEFAULT_PROJECT_NAME),
        secret: false,
    },
    Field {
        key: ROOT_PATH,
        default: Some(DEFAULT_ROOT_PATH),
        secret: false,
    },
    Field {
        key: DATABASE_URL,
        default: None,
        secret: true,
    },
];

/// Look up the canonical field for a raw key, ignoring ASCII case.
pub fn field_for(key: &str) -> Option<&'static Field> {
    FIELDS.iter().find(|f| f.key.eq_ignore_ascii_case(key))
}

/// Validated runtime settings for the service.
///
/// Instances only come out of [`Settings::load`](super::Settings::load) or
/// [`Settings::from_sources`](super::Settings::from_sources), so a value of
/// this type always carries a database URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    project_name: String,
    root_path: String,
    database_url: String,
}

impl Settings {
    /// Build settings from resolved values keyed by canonical field key.
    ///
    /// Missing optional fields take their defaults.
    pub(super) fn from_values(
        mut values: HashMap<&'static str, String>,
    ) -> Result<Self, ConfigError> {
        let mut take = |field: &Field| -> Result<String, ConfigError> {
            values
                .remove(field.key)
                .or_else(|| field.default.map(str::to_string))
                .ok_or(ConfigError::Missing(field.key))
        };

        let [project_name, root_path, database_url] = &FIELDS;
        Ok(Self {
            project_name: take(project_name)?,
            root_path: take(root_path)?,
            database_url: take(database_url)?,
        })
    }

    /// Display name of the service.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Path prefix the service is mounted under.
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Connection string for the service database.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Settings as canonical `(KEY, value)` pairs, for exporting to a child
    /// process environment.
    pub fn env_pairs(&self) -> [(&'static str, &str); 3] {
        [
            (PROJECT_NAME, self.project_name()),
            (ROOT_PATH, self.root_path()),
            (DATABASE_URL, self.database_url()),
        ]
    }
}
