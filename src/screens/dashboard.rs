//! 角色仪表盘
//!
//! 三种角色三个仪表盘；角色分发只在这里做一次，
//! 各个子界面不再各自判断角色。

use tracing::warn;

use crate::api;
use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::users::entities::UserRole;
use crate::render::{self, Table};
use crate::session::SessionStore;
use crate::status;

pub async fn show(session: &SessionStore, client: &RemoteClient) -> Result<()> {
    let user = session.require_user()?;
    println!("Dashboard for {} ({})\n", user.username, user.role);
    match user.role {
        UserRole::Student => student(client).await,
        UserRole::Professor => professor(client).await,
        UserRole::Admin => admin(client).await,
    }
}

/// 学生仪表盘：课程、作业（含推导状态）、未读通知数
///
/// 三个请求并发发出；任何一个失败只影响对应区块，不拖垮整屏。
async fn student(client: &RemoteClient) -> Result<()> {
    let (courses, assignments, submissions, notifications) = tokio::join!(
        api::courses::list(client),
        api::assignments::list(client, None),
        api::submissions::mine(client),
        api::notifications::list(client),
    );

    match courses {
        Ok(courses) => {
            let mut table = Table::new(&["ID", "Course"]);
            for course in &courses {
                table.add_row(vec![course.id.to_string(), course.name.clone()]);
            }
            println!("My courses ({}):\n{}", table.len(), table);
        }
        Err(e) => warn!("Failed to load courses: {e}"),
    }

    // 提交列表拉不下来时按"无提交"渲染作业区块，而不是整屏报错
    let submissions = match submissions {
        Ok(submissions) => submissions,
        Err(e) => {
            warn!("Failed to load submissions, statuses shown as not-submitted: {e}");
            Vec::new()
        }
    };

    match assignments {
        Ok(assignments) => {
            let now = chrono::Utc::now();
            let mut table = Table::new(&["ID", "Title", "Due", "Deadline", "Status"]);
            for assignment in &assignments {
                let submission = submissions.iter().find(|s| s.assignment == assignment.id);
                table.add_row(vec![
                    assignment.id.to_string(),
                    assignment.title.clone(),
                    render::format_opt_datetime(&assignment.due_date),
                    status::deadline_state(assignment, now).to_string(),
                    status::derive_status(submission).to_string(),
                ]);
            }
            println!("Assignments:\n{table}");
        }
        Err(e) => warn!("Failed to load assignments: {e}"),
    }

    match notifications {
        Ok(notifications) => {
            let unread = notifications.iter().filter(|n| !n.is_read).count();
            if unread > 0 {
                println!("You have {unread} unread notification(s). Run `assignment-cli notifications list`.");
            }
        }
        Err(e) => warn!("Failed to load notifications: {e}"),
    }

    Ok(())
}

/// 教授仪表盘：开设课程与已发布作业
async fn professor(client: &RemoteClient) -> Result<()> {
    let (courses, assignments) = tokio::join!(
        api::courses::list(client),
        api::assignments::list(client, None),
    );

    match courses {
        Ok(courses) => {
            let mut table = Table::new(&["ID", "Course", "Students", "Join code"]);
            for course in &courses {
                table.add_row(vec![
                    course.id.to_string(),
                    course.name.clone(),
                    course.students.len().to_string(),
                    render::format_opt(&course.join_code),
                ]);
            }
            println!("My courses:\n{table}");
        }
        Err(e) => warn!("Failed to load courses: {e}"),
    }

    match assignments {
        Ok(assignments) => {
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
            println!("My assignments:\n{table}");
        }
        Err(e) => warn!("Failed to load assignments: {e}"),
    }

    Ok(())
}

/// 管理员仪表盘：全站统计
async fn admin(client: &RemoteClient) -> Result<()> {
    let stats = api::admin::stats(client).await?;
    println!("Users:       {}", stats.total_users);
    println!("Courses:     {}", stats.total_courses);
    println!("Assignments: {}", stats.total_assignments);
    println!("Submissions: {}", stats.total_submissions);
    Ok(())
}
