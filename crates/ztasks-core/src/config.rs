use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

use crate::store::{
  DEFAULT_TASKS_KEY,
  DEFAULT_THEME_KEY,
  StorageKeys
};

const EMBEDDED_CONFIG_TOML: &str =
  include_str!("../assets/ztasks.toml");

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  pub version:  u32,
  pub storage:  StorageConfig,
  pub branding: BrandingConfig
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct StorageConfig {
  pub tasks_key: String,
  pub theme_key: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct BrandingConfig {
  pub brand_name:        String,
  pub logo_glyph:        String,
  pub title:             String,
  pub input_placeholder: String
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      version:  1,
      storage:  StorageConfig::default(),
      branding: BrandingConfig::default()
    }
  }
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      tasks_key: DEFAULT_TASKS_KEY
        .to_string(),
      theme_key: DEFAULT_THEME_KEY
        .to_string()
    }
  }
}

impl Default for BrandingConfig {
  fn default() -> Self {
    Self {
      brand_name:        "Tasks"
        .to_string(),
      logo_glyph:        "Z".to_string(),
      title:             "Task Manager"
        .to_string(),
      input_placeholder:
        "Describe your task..."
          .to_string()
    }
  }
}

impl AppConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<AppConfig>(raw)
        .context(
          "failed parsing app config"
        )?;
    config.sanitize();
    Ok(config)
  }

  /// The config compiled into the binary, or defaults if it is broken.
  pub fn load_embedded() -> Self {
    match Self::from_toml_str(
      EMBEDDED_CONFIG_TOML
    ) {
      | Ok(config) => {
        info!(
          version = config.version,
          tasks_key = %config.storage.tasks_key,
          theme_key = %config.storage.theme_key,
          "loaded app config"
        );
        config
      }
      | Err(err) => {
        error!(error = %format!("{err:#}"), "failed parsing app config; using defaults");
        AppConfig::default()
      }
    }
  }

  pub fn storage_keys(
    &self
  ) -> StorageKeys {
    StorageKeys {
      tasks: self
        .storage
        .tasks_key
        .clone(),
      theme: self
        .storage
        .theme_key
        .clone()
    }
  }

  fn sanitize(&mut self) {
    let defaults =
      StorageConfig::default();
    let storage = &mut self.storage;

    storage.tasks_key =
      storage.tasks_key.trim().to_string();
    storage.theme_key =
      storage.theme_key.trim().to_string();

    if storage.tasks_key.is_empty() {
      warn!(
        "blank tasks storage key; using \
         default"
      );
      storage.tasks_key =
        defaults.tasks_key.clone();
    }
    if storage.theme_key.is_empty() {
      warn!(
        "blank theme storage key; using \
         default"
      );
      storage.theme_key =
        defaults.theme_key.clone();
    }
    if storage.tasks_key
      == storage.theme_key
    {
      warn!(
        key = %storage.tasks_key,
        "tasks and theme share a storage \
         key; using defaults"
      );
      *storage = defaults;
    }

    let branding_defaults =
      BrandingConfig::default();
    let branding = &mut self.branding;
    for (value, fallback) in [
      (
        &mut branding.brand_name,
        branding_defaults.brand_name
      ),
      (
        &mut branding.logo_glyph,
        branding_defaults.logo_glyph
      ),
      (
        &mut branding.title,
        branding_defaults.title
      ),
      (
        &mut branding.input_placeholder,
        branding_defaults
          .input_placeholder
      )
    ] {
      if value.trim().is_empty() {
        *value = fallback;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_config_parses() {
    let config = AppConfig::from_toml_str(
      EMBEDDED_CONFIG_TOML
    )
    .expect("embedded config");
    assert_eq!(
      config.storage_keys(),
      StorageKeys::default()
    );
    assert_eq!(
      config.branding.title,
      "Task Manager"
    );
  }

  #[test]
  fn missing_sections_take_defaults() {
    let config =
      AppConfig::from_toml_str(
        "version = 2"
      )
      .expect("partial config");
    assert_eq!(config.version, 2);
    assert_eq!(
      config.storage,
      StorageConfig::default()
    );
    assert_eq!(
      config.branding,
      BrandingConfig::default()
    );
  }

  #[test]
  fn colliding_keys_fall_back_to_defaults() {
    let config =
      AppConfig::from_toml_str(
        "[storage]\ntasks_key = \
         \"shared\"\ntheme_key = \
         \"shared\"\n"
      )
      .expect("colliding config");
    assert_eq!(
      config.storage,
      StorageConfig::default()
    );
  }

  #[test]
  fn blank_values_are_replaced() {
    let config =
      AppConfig::from_toml_str(
        "[storage]\ntasks_key = \"  \
         \"\n[branding]\ntitle = \"\"\n"
      )
      .expect("blank config");
    assert_eq!(
      config.storage.tasks_key,
      "tasks"
    );
    assert_eq!(
      config.branding.title,
      "Task Manager"
    );
  }

  #[test]
  fn malformed_toml_is_an_error() {
    assert!(
      AppConfig::from_toml_str(
        "[storage\n"
      )
      .is_err()
    );
  }
}
