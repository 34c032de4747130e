use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::llm::GeminiClient;
use crate::store::AtlasClient;

/// Local settings: provider and store configuration plus optionally a
/// locally stored credential for reuse across sessions. Credentials resolve
/// environment-first and are never written to the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub gemini: GeminiSettings,
    pub atlas: AtlasSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    pub api_key_env: String,
    /// Key stored on this device for reuse across sessions.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasSettings {
    pub enabled: bool,
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub data_source: String,
    pub database: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini: GeminiSettings {
                api_key_env: "GEMINI_API_KEY".to_string(),
                api_key: None,
                model: "gemini-pro".to_string(),
                base_url: None,
            },
            atlas: AtlasSettings {
                enabled: false,
                api_key_env: "ATLAS_DATA_API_KEY".to_string(),
                api_key: None,
                base_url:
                    "https://ap-south-1.aws.data.mongodb-api.com/app/data-service/endpoint/data/v1"
                        .to_string(),
                data_source: "Cluster0".to_string(),
                database: "ai_tutor".to_string(),
            },
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mentora")
            .join("config.toml")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a file, falling back to defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(settings) = toml::from_str(&content) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the provider credential: environment first, then the locally
    /// stored key.
    pub fn gemini_api_key(&self) -> Option<String> {
        std::env::var(&self.gemini.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.gemini.api_key.clone())
    }

    pub fn atlas_api_key(&self) -> Option<String> {
        std::env::var(&self.atlas.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.atlas.api_key.clone())
    }

    /// Build a Gemini client from these settings, if a credential resolves.
    pub fn build_generative_client(&self) -> Option<GeminiClient> {
        let key = self.gemini_api_key()?;
        let mut client = GeminiClient::new(key).with_model(self.gemini.model.clone());
        if let Some(url) = &self.gemini.base_url {
            client = client.with_base_url(url.clone());
        }
        Some(client)
    }

    /// Build an Atlas client, if the store is enabled and a credential
    /// resolves.
    pub fn build_document_store(&self) -> Option<AtlasClient> {
        if !self.atlas.enabled {
            return None;
        }
        let key = self.atlas_api_key()?;
        Some(
            AtlasClient::new(key)
                .with_base_url(self.atlas.base_url.clone())
                .with_data_source(self.atlas.data_source.clone())
                .with_database(self.atlas.database.clone()),
        )
    }
}
