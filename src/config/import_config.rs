// ==========================================
// 物品数据导入工具 - 导入配置
// ==========================================
// 职责: 加载数据库连接参数与导入选项
// 来源（优先级从高到低）:
// 1. 环境变量 ITEMIMPORT_DB_PATH（仅覆盖数据库路径）
// 2. ITEMIMPORT_CONFIG 指定的 JSON 文件
// 3. 当前目录下 itemimport.json
// 4. 内置默认值
// ==========================================

use crate::db::DEFAULT_BUSY_TIMEOUT_MS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "ITEMIMPORT_CONFIG";

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "ITEMIMPORT_DB_PATH";

/// 默认配置文件名（当前目录）
pub const DEFAULT_CONFIG_FILE: &str = "itemimport.json";

/// 默认进度输出间隔（行）
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件解析失败 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ImportConfig - 配置根对象
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub import: ImportOptions,
}

/// 数据库连接参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite 文件路径（未配置时使用用户数据目录）
    #[serde(default)]
    pub path: Option<String>,

    /// busy_timeout（毫秒）
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

/// 导入选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOptions {
    /// 每处理多少行输出一次进度
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

fn default_progress_interval() -> usize {
    DEFAULT_PROGRESS_INTERVAL
}

impl ImportConfig {
    /// 按默认查找顺序加载配置
    pub fn load() -> ConfigResult<Self> {
        if let Some(path) = non_empty_env(CONFIG_PATH_ENV) {
            return Self::load_from_path(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from_path(local);
        }

        Ok(Self::default())
    }

    /// 从指定 JSON 文件加载配置
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let config: ImportConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: display,
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.import.progress_interval == 0 {
            return Err(ConfigError::ValueError {
                key: "import.progress_interval".to_string(),
                value: "0".to_string(),
                message: "必须为正整数".to_string(),
            });
        }
        Ok(())
    }

    /// 数据库路径（环境变量 > 配置文件 > 默认路径）
    pub fn db_path(&self) -> String {
        self.resolve_db_path(non_empty_env(DB_PATH_ENV).as_deref())
    }

    fn resolve_db_path(&self, env_override: Option<&str>) -> String {
        if let Some(path) = env_override {
            return path.to_string();
        }
        if let Some(path) = self.database.path.as_deref().map(str::trim) {
            if !path.is_empty() {
                return path.to_string();
            }
        }
        get_default_db_path()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 获取默认数据库路径
///
/// # 返回
/// - 用户数据目录/itemimport/items.db
/// - 无法获取用户数据目录时: ./items.db
pub fn get_default_db_path() -> String {
    let mut path = PathBuf::from("./items.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("itemimport");
        // 目录创建失败时回退到当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("items.db");
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ImportConfig::default();
        assert_eq!(config.database.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert_eq!(config.import.progress_interval, 1000);
        assert!(config.database.path.is_none());
    }

    #[test]
    fn test_load_from_path_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "database": {{ "path": "/tmp/items_test.db" }} }}"#).unwrap();

        let config = ImportConfig::load_from_path(file.path()).unwrap();

        assert_eq!(config.database.path.as_deref(), Some("/tmp/items_test.db"));
        assert_eq!(config.database.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert_eq!(config.import.progress_interval, DEFAULT_PROGRESS_INTERVAL);
    }

    #[test]
    fn test_load_from_path_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let err = ImportConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let err = ImportConfig::load_from_path("/nonexistent/itemimport.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_zero_progress_interval_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "import": {{ "progress_interval": 0 }} }}"#).unwrap();

        let err = ImportConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValueError { .. }));
    }

    #[test]
    fn test_resolve_db_path_precedence() {
        let mut config = ImportConfig::default();
        config.database.path = Some("from_file.db".to_string());

        assert_eq!(config.resolve_db_path(Some("from_env.db")), "from_env.db");
        assert_eq!(config.resolve_db_path(None), "from_file.db");

        config.database.path = Some("   ".to_string());
        assert!(config.resolve_db_path(None).ends_with("items.db"));
    }
}
