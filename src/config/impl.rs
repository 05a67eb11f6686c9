use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证无配置文件也能运行
            .set_default("app.system_name", "assignment-cli")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "warn")?
            .set_default("api.base_url", "http://127.0.0.1:8000/api")?
            .set_default("api.timeout", 30)?
            .set_default("api.connect_timeout", 10)?
            .set_default("api.max_upload_size", 10 * 1024 * 1024)?
            .set_default("credentials.path", ".assignment-cli/credentials.json")?
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
                Environment::with_prefix("ASSIGNMENT")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("api.base_url", std::env::var("API_BASE_URL").ok())?
            .set_override_option("credentials.path", std::env::var("CREDENTIALS_PATH").ok())?;

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
    pub fn init() -> Result<(), ConfigError> {
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

    /// API 基础地址，去除末尾斜杠
    pub fn api_base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load_without_files() {
        let config = AppConfig::load().expect("default config should load");
        assert!(!config.api.base_url.is_empty());
        assert!(config.api.timeout > 0);
        assert!(!config.credentials.path.is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let mut config = AppConfig::load().expect("default config should load");
        config.api.base_url = "http://example.com/api/".to_string();
        assert_eq!(config.api_base_url(), "http://example.com/api");
    }
}
