// src/config.rs

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use log::LevelFilter;

const CONFIG_FILE_NAME: &str = "sysvoices.json";
const CONFIG_ENV_VAR: &str = "SYSVOICES_CONFIG";

/// 语音缺少名称（或名称不合法）时的处理方式。
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingNamePolicy {
    #[default]
    Skip,
    Fail,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: Option<String>, // None 表示输出到 stderr
    pub on_missing_name: MissingNamePolicy,
    // 加载时日志尚未初始化，警告先暂存，由 init_logging 输出
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
            on_missing_name: MissingNamePolicy::Skip,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// 环境变量 SYSVOICES_CONFIG 优先，否则读取当前目录下的 sysvoices.json。
    pub fn load() -> Self {
        Self::load_from(env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    /// 显式指定的路径读取失败时记录警告；默认文件不存在则静默使用默认值。
    pub fn load_from(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(path) => match fs::read_to_string(&path) {
                Ok(content) => Self::from_json(&content),
                Err(e) => {
                    let mut config = Config::default();
                    config.warnings.push(format!(
                        "无法读取配置文件 {}: {}. 将使用默认配置。",
                        path.display(),
                        e
                    ));
                    config
                }
            },
            None => match fs::read_to_string(CONFIG_FILE_NAME) {
                Ok(content) => Self::from_json(&content),
                // 文件不存在是正常情况，直接返回默认值
                Err(_) => Config::default(),
            },
        }
    }

    pub fn from_json(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_else(|e| {
            let mut config = Config::default();
            config.warnings.push(format!(
                "解析 {} 失败: {}. 将使用默认配置。",
                CONFIG_FILE_NAME, e
            ));
            config
        })
    }

    /// 配置的日志级别；无法识别时返回 None。
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, MissingNamePolicy};
    use log::LevelFilter;
    use std::fs;

    #[test]
    fn empty_object_uses_defaults() {
        let config = Config::from_json("{}");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_file, None);
        assert_eq!(config.on_missing_name, MissingNamePolicy::Skip);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn reads_all_fields() {
        let config = Config::from_json(
            r#"{"log_level": "debug", "log_file": "voices.log", "on_missing_name": "fail"}"#,
        );
        assert_eq!(config.level_filter(), Some(LevelFilter::Debug));
        assert_eq!(config.log_file.as_deref(), Some("voices.log"));
        assert_eq!(config.on_missing_name, MissingNamePolicy::Fail);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn malformed_json_falls_back_to_defaults_with_warning() {
        let config = Config::from_json("{ not json");
        assert_eq!(config.on_missing_name, MissingNamePolicy::Skip);
        assert_eq!(config.level_filter(), Some(LevelFilter::Warn));
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("sysvoices.json"));
    }

    #[test]
    fn unknown_policy_falls_back_to_defaults() {
        let config = Config::from_json(r#"{"on_missing_name": "placeholder"}"#);
        assert_eq!(config.on_missing_name, MissingNamePolicy::Skip);
        assert_eq!(config.warnings.len(), 1);
    }

    #[test]
    fn invalid_level_is_not_parsed() {
        let config = Config::from_json(r#"{"log_level": "loud"}"#);
        assert_eq!(config.level_filter(), None);
    }

    #[test]
    fn warnings_are_not_read_from_json() {
        let config = Config::from_json(r#"{"warnings": ["x"]}"#);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn unreadable_explicit_path_records_warning() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let config = Config::load_from(Some(missing));
        assert_eq!(config.on_missing_name, MissingNamePolicy::Skip);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("nope.json"));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"on_missing_name": "fail"}"#).unwrap();
        let config = Config::load_from(Some(path));
        assert_eq!(config.on_missing_name, MissingNamePolicy::Fail);
        assert!(config.warnings.is_empty());
    }
}
