use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::{GradeRequest, SubmissionForm};

/// 首次提交作业（multipart：可选文件 + 可选附言）
/// POST /assignments/{id}/submit
pub async fn submit(
    client: &RemoteClient,
    assignment_id: i64,
    form: &SubmissionForm,
) -> Result<Submission> {
    client
        .post_multipart(&format!("assignments/{assignment_id}/submit/"), form)
        .await
}

/// 修改（重新提交）已有提交
/// PATCH /submissions/{id}
pub async fn resubmit(
    client: &RemoteClient,
    submission_id: i64,
    form: &SubmissionForm,
) -> Result<Submission> {
    client
        .patch_multipart(&format!("submissions/{submission_id}/"), form)
        .await
}

/// 当前学生的全部提交
/// GET /my-submissions
pub async fn mine(client: &RemoteClient) -> Result<Vec<Submission>> {
    client.get("my-submissions/").await
}

/// 某作业下的全部提交（教授）
/// GET /assignments/{id}/submissions
pub async fn for_assignment(client: &RemoteClient, assignment_id: i64) -> Result<Vec<Submission>> {
    client
        .get(&format!("assignments/{assignment_id}/submissions/"))
        .await
}

/// 评分（教授）
/// PATCH /submissions/{id}/grade
pub async fn grade(
    client: &RemoteClient,
    submission_id: i64,
    request: &GradeRequest,
) -> Result<Submission> {
    client
        .patch(&format!("submissions/{submission_id}/grade/"), request)
        .await
}
