use tracing::warn;

use crate::api;
use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::render::{self, Table};
use crate::status;
use crate::utils::datetime::parse_datetime;

/// 作业列表，可按课程过滤
pub async fn list(client: &RemoteClient, course_id: Option<i64>) -> Result<()> {
    let assignments = api::assignments::list(client, course_id).await?;
    if assignments.is_empty() {
        println!("No assignments.");
        return Ok(());
    }
    let now = chrono::Utc::now();
    let mut table = Table::new(&["ID", "Course", "Title", "Due", "Deadline"]);
    for assignment in &assignments {
        table.add_row(vec![
            assignment.id.to_string(),
            assignment.course.to_string(),
            assignment.title.clone(),
            render::format_opt_datetime(&assignment.due_date),
            status::deadline_state(assignment, now).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// 作业详情（学生视角）
///
/// 作业与本人提交并发拉取；提交拉取失败只降级状态区块。
pub async fn show(client: &RemoteClient, id: i64) -> Result<()> {
    let (assignment, submissions) = tokio::join!(
        api::assignments::get(client, id),
        api::submissions::mine(client),
    );
    let assignment = assignment?;
    let now = chrono::Utc::now();

    println!("Assignment #{}: {}", assignment.id, assignment.title);
    println!("Course:   #{}", assignment.course);
    println!("Due:      {}", render::format_opt_datetime(&assignment.due_date));
    println!("Late:     {}", if assignment.allow_late { "allowed" } else { "not allowed" });
    println!("Deadline: {}", status::deadline_state(&assignment, now));
    if !assignment.description.is_empty() {
        println!("\n{}\n", assignment.description);
    }

    match submissions {
        Ok(submissions) => {
            let submission = submissions.iter().find(|s| s.assignment == assignment.id);
            println!("Status:   {}", status::derive_status(submission));
            if let Some(sub) = submission {
                if let Some(grade) = sub.grade {
                    println!("Grade:    {grade}");
                }
                if let Some(feedback) = &sub.feedback {
                    if !feedback.is_empty() {
                        println!("Feedback: {feedback}");
                    }
                }
                println!(
                    "Edit:     {}",
                    if status::can_edit(&assignment, now) {
                        format!("allowed, run `assignment-cli resubmit {}`", sub.id)
                    } else {
                        "closed".to_string()
                    }
                );
            } else {
                println!(
                    "Submit:   {}",
                    if status::can_submit(&assignment, now) {
                        format!("allowed, run `assignment-cli submit {}`", assignment.id)
                    } else {
                        "closed".to_string()
                    }
                );
            }
        }
        Err(e) => warn!("Failed to load your submissions, status unknown: {e}"),
    }
    Ok(())
}

/// 发布作业（教授）
pub async fn create(
    client: &RemoteClient,
    course: i64,
    title: &str,
    description: &str,
    due: &str,
    allow_late: bool,
) -> Result<()> {
    let request = CreateAssignmentRequest {
        course,
        title: title.to_string(),
        description: description.to_string(),
        due_date: parse_datetime(due)?,
        allow_late,
    };
    let assignment = api::assignments::create(client, &request).await?;
    println!("Created assignment #{} '{}'", assignment.id, assignment.title);
    Ok(())
}

/// 修改作业（只发送给出的字段）
pub async fn update(
    client: &RemoteClient,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
    allow_late: Option<bool>,
) -> Result<()> {
    let request = UpdateAssignmentRequest {
        title,
        description,
        due_date: due.as_deref().map(parse_datetime).transpose()?,
        allow_late,
    };
    let assignment = api::assignments::update(client, id, &request).await?;
    println!("Updated assignment #{} '{}'", assignment.id, assignment.title);
    Ok(())
}

/// 删除作业
pub async fn delete(client: &RemoteClient, id: i64) -> Result<()> {
    api::assignments::delete(client, id).await?;
    println!("Deleted assignment #{id}.");
    Ok(())
}
