use serde::Serialize;

use super::entities::UserRole;

// 管理员修改用户角色请求
// PATCH /admin/users/{id}
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}
