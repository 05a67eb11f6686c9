use serde::{Deserialize, Serialize};

// 公告实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    // 作者用户 ID
    pub author: i64,
    #[serde(default)]
    pub author_username: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
