use serde::Serialize;

// 发布/修改公告请求
#[derive(Debug, Clone, Serialize)]
pub struct NoticeRequest {
    pub title: String,
    pub content: String,
}
