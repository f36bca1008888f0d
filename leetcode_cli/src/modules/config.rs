use anyhow::{Context, Result};
use leetcode_cli_libs::language::{Language, DEFAULT_LANGUAGE};
use leetcode_cli_libs::leetcode::client::Site;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use tokio::fs;

/// 設定ファイルのパスを上書きする環境変数
pub const CONFIG_PATH_ENV: &str = "LEETCODE_CLI_CONFIG";
const CONFIG_DIR: &str = ".leetcode_cli";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: Site,
    #[serde(default)]
    pub cookie: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    String::from(DEFAULT_LANGUAGE.slug())
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: Site::Cn,
            cookie: String::new(),
            language: default_language(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = env::var("HOME").context("couldn't determine home directory")?;

        Ok(PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub async fn load() -> Result<Config> {
        let path = Self::path()?;
        let body = fs::read_to_string(&path)
            .await
            .with_context(|| format!("couldn't read config at {}", path.display()))?;
        let config = serde_json::from_str(&body)
            .with_context(|| format!("config at {} is broken", path.display()))?;

        Ok(config)
    }

    pub async fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("couldn't create config directory {}", dir.display()))?;
        }
        let body = serde_json::to_string_pretty(self)?;
        fs::write(&path, body)
            .await
            .with_context(|| format!("couldn't write config to {}", path.display()))?;
        tracing::info!("configuration was saved at {}", path.display());

        Ok(())
    }

    /// 設定された言語タグを解決する。未知のタグはデフォルト言語になる。
    pub fn language(&self) -> Language {
        Language::resolve(&self.language)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            site: Site::Com,
            cookie: String::from("LEETCODE_SESSION=abc; csrftoken=xyz"),
            language: String::from("rust"),
        };
        let body = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&body).unwrap();
        assert_eq!(restored.site, Site::Com);
        assert_eq!(restored.language(), Language::Rust);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let restored: Config = serde_json::from_str(r#"{"site": "cn"}"#).unwrap();
        assert_eq!(restored.site, Site::Cn);
        assert!(restored.cookie.is_empty());
        assert_eq!(restored.language(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_unknown_language_resolves_to_default() {
        let config = Config {
            language: String::from("cobol"),
            ..Config::default()
        };
        assert_eq!(config.language(), DEFAULT_LANGUAGE);
    }
}
