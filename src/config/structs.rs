use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub transfer: TransferConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// 名单导入导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    pub csv_delimiter: String, // 单个 ASCII 字符
    pub max_import_rows: usize,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            csv_delimiter: ",".to_string(),
            max_import_rows: 1000,
        }
    }
}
