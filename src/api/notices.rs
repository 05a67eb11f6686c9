use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::notices::entities::Notice;
use crate::models::notices::requests::NoticeRequest;

/// 公告列表（按创建时间倒序）
/// GET /notices
pub async fn list(client: &RemoteClient) -> Result<Vec<Notice>> {
    client.get("notices/").await
}

/// 公告详情
/// GET /notices/{id}
pub async fn get(client: &RemoteClient, id: i64) -> Result<Notice> {
    client.get(&format!("notices/{id}/")).await
}

/// 发布公告（教授/管理员）
/// POST /notices
pub async fn create(client: &RemoteClient, request: &NoticeRequest) -> Result<Notice> {
    client.post("notices/", request).await
}

/// 修改公告
/// PATCH /notices/{id}
pub async fn update(client: &RemoteClient, id: i64, request: &NoticeRequest) -> Result<Notice> {
    client.patch(&format!("notices/{id}/"), request).await
}

/// 删除公告
/// DELETE /notices/{id}
pub async fn delete(client: &RemoteClient, id: i64) -> Result<()> {
    client.delete(&format!("notices/{id}/")).await
}
