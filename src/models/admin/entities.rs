use serde::{Deserialize, Serialize};

// 管理员仪表盘统计
// GET /admin/stats （该接口返回驼峰字段）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_courses: i64,
    pub total_assignments: i64,
    pub total_submissions: i64,
    pub total_users: i64,
}

// 操作日志条目
// GET /admin/logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: i64,
    pub actor_username: String,
    pub action_type: String,
    #[serde(default)]
    pub details: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
