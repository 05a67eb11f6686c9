use std::path::PathBuf;

use serde::Serialize;

// 提交/重新提交作业的表单内容
//
// 走 multipart 而非 JSON：文件与附言都是可选项。
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub file: Option<PathBuf>,
    pub description: Option<String>,
}

// 评分请求
// PATCH /submissions/{id}/grade
#[derive(Debug, Clone, Serialize)]
pub struct GradeRequest {
    pub grade: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
