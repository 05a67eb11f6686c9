use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::admin::entities::{ActivityLog, AdminStats};
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::UpdateRoleRequest;

/// 全部用户列表
/// GET /admin/users
pub async fn list_users(client: &RemoteClient) -> Result<Vec<User>> {
    client.get("admin/users/").await
}

/// 修改用户角色（仅管理员；用户不能改自己的角色）
/// PATCH /admin/users/{id}
pub async fn update_role(client: &RemoteClient, user_id: i64, role: UserRole) -> Result<User> {
    let request = UpdateRoleRequest { role };
    client.patch(&format!("admin/users/{user_id}/"), &request).await
}

/// 仪表盘统计
/// GET /admin/stats
pub async fn stats(client: &RemoteClient) -> Result<AdminStats> {
    client.get("admin/stats/").await
}

/// 操作日志
/// GET /admin/logs
pub async fn logs(client: &RemoteClient) -> Result<Vec<ActivityLog>> {
    client.get("admin/logs/").await
}
