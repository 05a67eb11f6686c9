use std::path::PathBuf;

use crate::api;
use crate::client::RemoteClient;
use crate::errors::{ClientError, Result};
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::{GradeRequest, SubmissionForm};
use crate::render::{self, Table};
use crate::screens::OptimisticUpdate;
use crate::status;

/// 首次提交作业
///
/// 先在本地按截止规则把关，免去一次注定被服务端拒绝的上传；
/// 服务端仍是最终权威（含迟交标记的判定）。
pub async fn submit(
    client: &RemoteClient,
    assignment_id: i64,
    file: Option<PathBuf>,
    message: Option<String>,
) -> Result<()> {
    if file.is_none() && message.is_none() {
        return Err(ClientError::validation(
            "Nothing to submit: provide --file and/or --message",
        ));
    }
    let assignment = api::assignments::get(client, assignment_id).await?;
    let now = chrono::Utc::now();
    if !status::can_submit(&assignment, now) {
        return Err(ClientError::validation(format!(
            "Assignment '{}' is {} and does not accept submissions",
            assignment.title,
            status::deadline_state(&assignment, now)
        )));
    }

    let form = SubmissionForm {
        file,
        description: message,
    };
    let submission = api::submissions::submit(client, assignment_id, &form).await?;
    let flag = if submission.is_late { " (late)" } else { "" };
    println!(
        "Submitted #{} for '{}'{flag}.",
        submission.id, assignment.title
    );
    Ok(())
}

/// 重新提交（修改已有提交）
///
/// 修改只允许在原始提交窗口内；迟交许可不延长修改权。
pub async fn resubmit(
    client: &RemoteClient,
    submission_id: i64,
    file: Option<PathBuf>,
    message: Option<String>,
) -> Result<()> {
    if file.is_none() && message.is_none() {
        return Err(ClientError::validation(
            "Nothing to resubmit: provide --file and/or --message",
        ));
    }
    let mine = api::submissions::mine(client).await?;
    let existing = mine
        .iter()
        .find(|s| s.id == submission_id)
        .ok_or_else(|| ClientError::not_found(format!("Submission {submission_id} is not yours")))?;

    let assignment = api::assignments::get(client, existing.assignment).await?;
    let now = chrono::Utc::now();
    if !status::can_edit(&assignment, now) {
        return Err(ClientError::validation(format!(
            "Assignment '{}' is past due; submissions can no longer be edited",
            assignment.title
        )));
    }

    let form = SubmissionForm {
        file,
        description: message,
    };
    let submission = api::submissions::resubmit(client, submission_id, &form).await?;
    println!("Updated submission #{}.", submission.id);
    Ok(())
}

/// 当前学生的提交一览（含推导状态）
pub async fn mine(client: &RemoteClient) -> Result<()> {
    let submissions = api::submissions::mine(client).await?;
    if submissions.is_empty() {
        println!("No submissions yet.");
        return Ok(());
    }
    println!("{}", submission_table(&submissions));
    Ok(())
}

/// 某作业下的全部提交（教授视角）
pub async fn for_assignment(client: &RemoteClient, assignment_id: i64) -> Result<()> {
    let submissions = api::submissions::for_assignment(client, assignment_id).await?;
    if submissions.is_empty() {
        println!("No submissions for assignment #{assignment_id}.");
        return Ok(());
    }
    println!("{}", submission_table(&submissions));
    Ok(())
}

/// 评分：对本地列表乐观应用，远程失败时回退并渲染确认状态
pub async fn grade(
    client: &RemoteClient,
    assignment_id: i64,
    submission_id: i64,
    score: i32,
    feedback: Option<String>,
) -> Result<()> {
    let submissions = api::submissions::for_assignment(client, assignment_id).await?;
    if !submissions.iter().any(|s| s.id == submission_id) {
        return Err(ClientError::not_found(format!(
            "Submission {submission_id} does not belong to assignment {assignment_id}"
        )));
    }

    let applied: Vec<Submission> = submissions
        .iter()
        .map(|s| {
            let mut s = s.clone();
            if s.id == submission_id {
                s.grade = Some(score);
                s.feedback = feedback.clone();
            }
            s
        })
        .collect();

    let request = GradeRequest {
        grade: score,
        feedback,
    };
    let update = OptimisticUpdate::new(submissions, applied);
    let (state, outcome) = update
        .commit(|| async {
            api::submissions::grade(client, submission_id, &request)
                .await
                .map(|_| ())
        })
        .await;

    println!("{}", submission_table(&state));
    match outcome {
        Ok(()) => {
            println!("Graded submission #{submission_id} with {score}.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn submission_table(submissions: &[Submission]) -> Table {
    let mut table = Table::new(&["ID", "Assignment", "Student", "Submitted", "Status", "Grade"]);
    for sub in submissions {
        table.add_row(vec![
            sub.id.to_string(),
            sub.assignment_title
                .clone()
                .unwrap_or_else(|| format!("#{}", sub.assignment)),
            sub.student_username
                .clone()
                .unwrap_or_else(|| format!("#{}", sub.student)),
            render::format_opt_datetime(&sub.submitted_at),
            status::derive_status(Some(sub)).to_string(),
            sub.grade.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}
