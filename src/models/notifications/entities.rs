use serde::{Deserialize, Serialize};

// 通知实体（仅属于当前登录用户）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
