// Language configuration for the execution engine
use anyhow::{bail, Context, Result};
use judgewrap_common::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/languages.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Engine-side language id sent as `language_id`
    pub language_id: u32,
    pub file_extension: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct LanguagesJson {
    languages: Vec<LanguageConfig>,
}

/// Language configuration manager
#[derive(Debug, Clone)]
pub struct LanguageConfigManager {
    configs: HashMap<Language, LanguageConfig>,
}

impl LanguageConfigManager {
    /// Load language configurations from languages.json
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            bail!("Language config file not found: {}", config_path.display());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let languages_json: LanguagesJson = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let mut configs = HashMap::new();
        for lang in languages_json.languages {
            let Some(language) = Language::from_name(&lang.name) else {
                bail!("Unknown language '{}' in {}", lang.name, config_path.display());
            };
            configs.insert(language, lang);
        }

        if configs.is_empty() {
            bail!("No languages configured in {}", config_path.display());
        }

        Ok(Self { configs })
    }

    /// Load config/languages.json, falling back to the built-in engine ids
    pub fn load_default() -> Result<Self> {
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            Self::load(default_path)
        } else {
            warn!(path = DEFAULT_CONFIG_PATH, "Language config not found, using built-in engine ids");
            Ok(Self::builtin())
        }
    }

    /// Judge0 CE ids for the supported families
    pub fn builtin() -> Self {
        let entries = [
            (Language::Java, "OpenJDK 13.0.1", 62, ".java"),
            (Language::Cpp, "GCC 9.2.0", 54, ".cpp"),
            (Language::JavaScript, "Node.js 12.14.0", 63, ".js"),
        ];

        let configs = entries
            .into_iter()
            .map(|(language, version, language_id, ext)| {
                let config = LanguageConfig {
                    name: language.to_string(),
                    version: version.to_string(),
                    language_id,
                    file_extension: ext.to_string(),
                };
                (language, config)
            })
            .collect();

        Self { configs }
    }

    /// Get configuration for a specific language
    pub fn get_config(&self, language: &Language) -> Result<&LanguageConfig> {
        self.configs
            .get(language)
            .ok_or_else(|| anyhow::anyhow!("No configuration found for language: {}", language))
    }

    /// Engine language id for a language
    pub fn language_id(&self, language: &Language) -> Result<u32> {
        Ok(self.get_config(language)?.language_id)
    }

    /// List all configured languages, sorted by name
    pub fn list_languages(&self) -> Vec<&LanguageConfig> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }
}
