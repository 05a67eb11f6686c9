use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};

/// 当前用户可见的作业列表，可按课程过滤
/// GET /assignments[?course_id=]
pub async fn list(client: &RemoteClient, course_id: Option<i64>) -> Result<Vec<Assignment>> {
    let path = match course_id {
        Some(id) => format!("assignments/?course_id={id}"),
        None => "assignments/".to_string(),
    };
    client.get(&path).await
}

/// 作业详情
/// GET /assignments/{id}
pub async fn get(client: &RemoteClient, id: i64) -> Result<Assignment> {
    client.get(&format!("assignments/{id}/")).await
}

/// 发布作业（教授）
/// POST /assignments
pub async fn create(client: &RemoteClient, request: &CreateAssignmentRequest) -> Result<Assignment> {
    client.post("assignments/", request).await
}

/// 修改作业
/// PATCH /assignments/{id}
pub async fn update(
    client: &RemoteClient,
    id: i64,
    request: &UpdateAssignmentRequest,
) -> Result<Assignment> {
    client.patch(&format!("assignments/{id}/"), request).await
}

/// 删除作业
/// DELETE /assignments/{id}
pub async fn delete(client: &RemoteClient, id: i64) -> Result<()> {
    client.delete(&format!("assignments/{id}/")).await
}
