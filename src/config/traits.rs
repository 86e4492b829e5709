use crate::error::AccompanistError;
use serde::{Deserialize, Serialize};

/// One table of the accompanist settings file (`[evolution]`, `[timing]`).
///
/// Sections validate themselves before `ConfigManager` commits them and can
/// describe their tunables as a manifest.
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), AccompanistError>;
    fn to_manifest(&self) -> ConfigManifest;
}

/// Tunables of a section with their defaults and accepted ranges.
///
/// Every key the section serializes has exactly one entry, so the manifest
/// can document a settings file or drive a form over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

impl ConfigManifest {
    pub fn field(&self, name: &str) -> Option<&FieldManifest> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    /// Key as written in the settings file.
    pub name: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}

impl FieldManifest {
    /// Whether a numeric value lies inside the advertised bounds.
    pub fn admits(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}
