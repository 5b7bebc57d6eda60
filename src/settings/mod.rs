pub mod args;
pub mod errors;

use std::path::Path;

use log::debug;
use serde::Deserialize;

use args::SettingsArgs;
use errors::SettingsError;

/// Knobs for the emitted C source. Every field has a default, so a settings
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Header that declares the option-parsing library.
    pub header: String,
    /// Identifier of the registration table.
    pub table_name: String,
    /// Spaces in front of each table row.
    pub indent: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            header: default_header(),
            table_name: default_table_name(),
            indent: 4,
        }
    }
}

fn default_header() -> String {
    "parse_args.h".to_string()
}

fn default_table_name() -> String {
    "options".to_string()
}

impl GeneratorSettings {
    /// Settings from an optional file, then command-line overrides on top.
    pub fn resolve(args: &SettingsArgs) -> Result<Self, SettingsError> {
        let mut settings = match &args.settings {
            Some(path) => load_settings(path)?,
            None => Self::default(),
        };

        if let Some(header) = &args.header {
            settings.header = header.clone();
        }
        if let Some(table) = &args.table {
            settings.table_name = table.clone();
        }

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.header.trim().is_empty() {
            return Err(SettingsError::InvalidSetting(
                "header must not be empty".to_string(),
            ));
        }
        let valid_ident = self
            .table_name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && self
                .table_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_ident {
            return Err(SettingsError::InvalidSetting(format!(
                "table name '{}' is not a C identifier",
                self.table_name
            )));
        }
        Ok(())
    }
}

/// Reads settings from a TOML, YAML or JSON file, picked by extension.
pub fn load_settings(path: &str) -> Result<GeneratorSettings, SettingsError> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if !matches!(ext.as_str(), "toml" | "yaml" | "yml" | "json") {
        return Err(SettingsError::UnsupportedFormat(path.to_string()));
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| SettingsError::FileError(format!("failed to open {}: {}", path, e)))?;

    let settings: GeneratorSettings = match ext.as_str() {
        "toml" => toml::from_str(&text).map_err(|e| SettingsError::ParseError(e.to_string()))?,
        "yaml" | "yml" => {
            serde_yaml::from_str(&text).map_err(|e| SettingsError::ParseError(e.to_string()))?
        }
        "json" => {
            serde_json::from_str(&text).map_err(|e| SettingsError::ParseError(e.to_string()))?
        }
        _ => return Err(SettingsError::UnsupportedFormat(path.to_string())),
    };

    debug!("loaded settings from {}: {:?}", path, settings);
    Ok(settings)
}
