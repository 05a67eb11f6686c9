use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub credentials: CredentialConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 远程 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,       // 后端 API 基础地址
    pub timeout: u64,           // 请求超时 (秒)
    pub connect_timeout: u64,   // 连接超时 (秒)
    pub max_upload_size: usize, // 单文件最大字节数
}

/// 凭证存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialConfig {
    pub path: String, // 凭证文件路径
}
