//! `package.json` manifest handling
//!
//! The manifest is kept as a JSON object so keys from the template pack survive in
//! their original order. Only the `scripts` and `devDependencies` sections are ever
//! touched, and only by adding keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const SCRIPTS: &str = "scripts";
pub const DEV_DEPENDENCIES: &str = "devDependencies";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ManifestError {
    #[error("package.json template has no `{section}` section")]
    MissingSection { section: &'static str },
    #[error("`{section}` in package.json template should be an object")]
    NotAnObject { section: &'static str },
    #[error("no script template named `{name}`")]
    UnknownScript { name: String },
    #[error("script `{name}` was already written during this run")]
    ScriptRewritten { name: String },
}

/// In-memory `package.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    /// Parse a manifest from JSON text; the top level must be an object
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Pretty-printed JSON with a trailing newline
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.entry(SCRIPTS, name)
    }

    pub fn dev_dependency(&self, name: &str) -> Option<&str> {
        self.entry(DEV_DEPENDENCIES, name)
    }

    /// Names of all scripts, in manifest order
    pub fn script_names(&self) -> Vec<&str> {
        self.keys(SCRIPTS)
    }

    /// Names of all devDependencies, in manifest order
    pub fn dev_dependency_names(&self) -> Vec<&str> {
        self.keys(DEV_DEPENDENCIES)
    }

    /// Set `scripts[name]`, overwriting a value that came from the template
    pub fn set_script(&mut self, name: &str, command: &str) -> Result<(), ManifestError> {
        self.section_mut(SCRIPTS)?
            .insert(name.to_string(), Value::String(command.to_string()));
        Ok(())
    }

    /// Set `devDependencies[name]`
    pub fn set_dev_dependency(&mut self, name: &str, version: &str) -> Result<(), ManifestError> {
        self.section_mut(DEV_DEPENDENCIES)?
            .insert(name.to_string(), Value::String(version.to_string()));
        Ok(())
    }

    fn entry(&self, section: &str, name: &str) -> Option<&str> {
        self.0.get(section)?.as_object()?.get(name)?.as_str()
    }

    fn keys(&self, section: &str) -> Vec<&str> {
        self.0
            .get(section)
            .and_then(Value::as_object)
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn section_mut(&mut self, section: &'static str) -> Result<&mut Map<String, Value>, ManifestError> {
        self.0
            .get_mut(section)
            .ok_or(ManifestError::MissingSection { section })?
            .as_object_mut()
            .ok_or(ManifestError::NotAnObject { section })
    }
}
