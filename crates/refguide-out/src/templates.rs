//! Template loading for the guide layout.
//!
//! Supports the reference-templates.yaml format with:
//! - Multiple named templates
//! - Handlebars syntax
//! - Documentation entries for the custom helpers

use serde::Deserialize;
use std::collections::HashMap;

/// Templates every layout needs
pub const REQUIRED_TEMPLATES: [&str; 5] = ["banner", "footer", "header", "table", "lines"];

/// Templates compiled into the binary
const EMBEDDED_TEMPLATES: &str = include_str!("../templates/reference-templates.yaml");

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
    #[serde(default)]
    pub helpers: HashMap<String, HelperDoc>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

/// Helper documentation entry
#[derive(Debug, Clone, Deserialize)]
pub struct HelperDoc {
    pub description: String,
    #[serde(default)]
    pub usage: Option<String>,
}

impl TemplatesFile {
    /// Load templates from a YAML file
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file: {}", e))?;
        Self::from_yaml(&content)
    }

    /// The templates shipped with the crate
    pub fn embedded() -> Result<Self, String> {
        Self::from_yaml(EMBEDDED_TEMPLATES)
    }

    /// Parse and check templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let file: TemplatesFile = serde_yaml::from_str(yaml)
            .map_err(|e| format!("Failed to parse templates YAML: {}", e))?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<(), String> {
        let missing: Vec<&str> = REQUIRED_TEMPLATES
            .iter()
            .copied()
            .filter(|name| !self.templates.contains_key(*name))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Missing templates: {}", missing.join(", ")))
        }
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// All template names, sorted
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
