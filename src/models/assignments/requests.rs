use serde::Serialize;

// 创建作业请求
// POST /assignments
#[derive(Debug, Clone, Serialize)]
pub struct CreateAssignmentRequest {
    pub course: i64,
    pub title: String,
    pub description: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub allow_late: bool,
}

// 修改作业请求 (PATCH，全部字段可选)
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAssignmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_late: Option<bool>,
}
