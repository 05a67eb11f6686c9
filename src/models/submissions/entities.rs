use serde::{Deserialize, Serialize};

// 提交显示状态
//
// 状态永远由 (submitted_at, is_late, grade) 推导（见 status 模块），
// 不允许单独设置；服务端返回的 status 字段仅作展示参考。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionStatus {
    NotSubmitted,    // 未提交
    SubmittedOnTime, // 按时提交
    SubmittedLate,   // 迟交
    Graded,          // 已评分
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SubmissionStatus::NotSubmitted => "not-submitted",
            SubmissionStatus::SubmittedOnTime => "submitted-on-time",
            SubmissionStatus::SubmittedLate => "submitted-late",
            SubmissionStatus::Graded => "graded",
        };
        write!(f, "{label}")
    }
}

// 提交实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    // 唯一 ID
    pub id: i64,
    // 所属作业 ID
    pub assignment: i64,
    // 所属作业标题（列表展示用）
    #[serde(default)]
    pub assignment_title: Option<String>,
    // 提交学生的用户 ID
    pub student: i64,
    // 提交学生用户名（服务端序列化字段名即为驼峰）
    #[serde(default, rename = "studentUsername")]
    pub student_username: Option<String>,
    // 已上传文件的下载地址
    #[serde(default)]
    pub file_url: Option<String>,
    // 学生附言
    #[serde(default)]
    pub description: Option<String>,
    // 提交时间；None 表示从未提交
    #[serde(default)]
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 迟交标记（服务端在提交时刻判定）
    #[serde(default)]
    pub is_late: bool,
    // 最终提交标记
    #[serde(default)]
    pub is_final: bool,
    // 分数；None 表示未评分
    #[serde(default)]
    pub grade: Option<i32>,
    // 教授反馈
    #[serde(default)]
    pub feedback: Option<String>,
}
