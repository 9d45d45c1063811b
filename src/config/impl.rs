use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;
use crate::errors::{RecordsError, Result};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> std::result::Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，缺少配置文件时也能启动
            .set_default("app.system_name", "University Records")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("database.url", "university.db")?
            .set_default("database.pool_size", 5)?
            .set_default("database.timeout", 30)?
            .set_default("transfer.csv_delimiter", ",")?
            .set_default("transfer.max_import_rows", 1000)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("UNIVERSITY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> std::result::Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

impl super::TransferConfig {
    /// CSV 分隔符字节，必须是单个 ASCII 字符
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.csv_delimiter.as_bytes() {
            [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => Ok(*b),
            _ => Err(RecordsError::validation(format!(
                "CSV delimiter must be a single ASCII character, got {:?}",
                self.csv_delimiter
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::TransferConfig;

    #[test]
    fn test_default_delimiter() {
        let transfer = TransferConfig::default();
        assert_eq!(transfer.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_semicolon_delimiter() {
        let transfer = TransferConfig {
            csv_delimiter: ";".to_string(),
            ..Default::default()
        };
        assert_eq!(transfer.delimiter_byte().unwrap(), b';');
    }

    #[test]
    fn test_invalid_delimiter() {
        for bad in ["", ";;", "\"", "é"] {
            let transfer = TransferConfig {
                csv_delimiter: bad.to_string(),
                ..Default::default()
            };
            assert!(transfer.delimiter_byte().is_err(), "{bad:?} accepted");
        }
    }
}
