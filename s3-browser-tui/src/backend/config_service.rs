//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

const APP_DIR: &str = "s3-browser";
const CONFIG_FILE: &str = "config.json";

/// 应用目录：`<config_dir>/s3-browser`
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 配置文件读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用配置
///
/// 缺失的字段使用默认值，旧版本的配置文件也能读取。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 界面语言（`en-US` / `zh-CN`）
    pub language: String,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    pub force_path_style: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            theme: Theme::default(),
            region: None,
            endpoint_url: None,
            profile: None,
            force_path_style: false,
        }
    }
}

impl AppConfig {
    /// 解析后的界面语言，无法识别时回落到英文
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', falling back to en-US", self.language);
            Language::default()
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// JSON 文件配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 使用默认位置 `<config_dir>/s3-browser/config.json`
    pub fn new() -> Self {
        Self::with_path(app_dir().join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            log::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        log::info!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("s3-browser-test-{}-{name}", std::process::id()))
            .join(CONFIG_FILE)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let service = JsonConfigService::with_path(temp_path("missing"));
        assert!(!service.exists());
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let service = JsonConfigService::with_path(&path);
        let config = AppConfig {
            language: "zh-CN".to_string(),
            theme: Theme::Light,
            region: Some("eu-west-1".to_string()),
            endpoint_url: Some("http://localhost:9000".to_string()),
            profile: None,
            force_path_style: true,
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"endpointUrl\""));
        assert!(!raw.contains("\"profile\""));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"region":"ap-northeast-1"}"#).unwrap();

        let config = JsonConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.region.as_deref(), Some("ap-northeast-1"));
        assert_eq!(config.language, "en-US");
        assert!(!config.force_path_style);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = temp_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{region").unwrap();

        let err = JsonConfigService::with_path(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = AppConfig {
            language: "xx".to_string(),
            ..Default::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }
}
