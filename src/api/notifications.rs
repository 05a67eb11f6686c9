use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::notifications::entities::Notification;

/// 当前用户的通知列表
/// GET /notifications
pub async fn list(client: &RemoteClient) -> Result<Vec<Notification>> {
    client.get("notifications/").await
}

/// 标记通知已读
/// POST /notifications/{id}/read
pub async fn mark_read(client: &RemoteClient, id: i64) -> Result<()> {
    client.post_empty(&format!("notifications/{id}/read/")).await
}
