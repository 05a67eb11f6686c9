use serde::{Deserialize, Serialize};

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 所属课程 ID
    pub course: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    #[serde(default)]
    pub description: String,
    // 截止时间；缺失时状态推导按"已关闭"处理
    #[serde(default)]
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    // 是否允许迟交
    #[serde(default)]
    pub allow_late: bool,
}
