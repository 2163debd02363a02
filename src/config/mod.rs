// 配置管理模块

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config/app.toml";

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 文件选择配置
    #[serde(default)]
    pub selector: SelectorConfig,
    /// 本地文件系统适配器配置
    #[serde(default)]
    pub native: NativeConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 文件选择配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// 宿主是否处于安全上下文（如 HTTPS 页面）
    ///
    /// 只有安全上下文才会尝试 `getAsFileSystemHandle`
    #[serde(default = "default_secure_context")]
    pub secure_context: bool,
}

fn default_secure_context() -> bool {
    true
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            secure_context: default_secure_context(),
        }
    }
}

/// 本地文件系统适配器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeConfig {
    /// 每次目录读取返回的最大条目数
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// 是否跟随符号链接
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_page_size() -> usize {
    100
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            follow_symlinks: false,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 是否启用日志文件持久化
    #[serde(default)]
    pub enabled: bool,
    /// 日志文件保存目录
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// 日志保留天数（默认 7 天）
    #[serde(default = "default_log_retention_days")]
    pub retention_days: u32,
    /// 日志级别（默认 info）
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_retention_days() -> u32 {
    7
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            retention_days: default_log_retention_days(),
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub async fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("读取配置文件失败: {}", path))?;

        let config: AppConfig = toml::from_str(&content).context("解析配置文件失败")?;

        if config.native.page_size == 0 {
            anyhow::bail!("配置错误: native.page_size 必须大于 0");
        }

        Ok(config)
    }

    /// 加载配置，失败时使用默认配置
    pub async fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path).await {
            Ok(config) => {
                tracing::info!("配置文件加载成功: {}", path);
                config
            }
            Err(e) => {
                tracing::warn!("配置文件加载失败，使用默认配置: {:#}", e);
                Self::default()
            }
        }
    }
}
