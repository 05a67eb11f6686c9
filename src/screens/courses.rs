use tracing::warn;

use crate::api;
use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::courses::requests::CourseRequest;
use crate::render::{self, Table};
use crate::status;

/// 课程列表
pub async fn list(client: &RemoteClient) -> Result<()> {
    let courses = api::courses::list(client).await?;
    if courses.is_empty() {
        println!("No courses.");
        return Ok(());
    }
    let mut table = Table::new(&["ID", "Course", "Professor", "Students", "Join code"]);
    for course in &courses {
        table.add_row(vec![
            course.id.to_string(),
            course.name.clone(),
            course.professor.to_string(),
            course.students.len().to_string(),
            render::format_opt(&course.join_code),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// 课程详情：课程信息 + 名单与作业并发拉取
///
/// 作业列表失败时仍渲染课程与名单，区块级降级。
pub async fn show(client: &RemoteClient, id: i64) -> Result<()> {
    let (course, assignments) = tokio::join!(
        api::courses::get(client, id),
        api::assignments::list(client, Some(id)),
    );
    let course = course?;

    println!("Course #{}: {}", course.id, course.name);
    if let Some(code) = &course.join_code {
        println!("Join code: {code}");
    }

    let mut roster = Table::new(&["ID", "Username", "Email"]);
    for student in &course.students {
        roster.add_row(vec![
            student.id.to_string(),
            student.username.clone(),
            student.email.clone(),
        ]);
    }
    println!("\nStudents ({}):\n{}", roster.len(), roster);

    match assignments {
        Ok(assignments) => {
            let now = chrono::Utc::now();
            let mut table = Table::new(&["ID", "Title", "Due", "Deadline"]);
            for assignment in &assignments {
                table.add_row(vec![
                    assignment.id.to_string(),
                    assignment.title.clone(),
                    render::format_opt_datetime(&assignment.due_date),
                    status::deadline_state(assignment, now).to_string(),
                ]);
            }
            println!("Assignments:\n{table}");
        }
        Err(e) => warn!("Failed to load assignments for course {id}: {e}"),
    }
    Ok(())
}

/// 创建课程；参与码由服务端生成后回显
pub async fn create(client: &RemoteClient, name: &str) -> Result<()> {
    let course = api::courses::create(
        client,
        &CourseRequest {
            name: name.to_string(),
        },
    )
    .await?;
    println!(
        "Created course #{} '{}' (join code: {})",
        course.id,
        course.name,
        render::format_opt(&course.join_code)
    );
    Ok(())
}

/// 改名
pub async fn update(client: &RemoteClient, id: i64, name: &str) -> Result<()> {
    let course = api::courses::update(
        client,
        id,
        &CourseRequest {
            name: name.to_string(),
        },
    )
    .await?;
    println!("Updated course #{} -> '{}'", course.id, course.name);
    Ok(())
}

/// 删除课程
pub async fn delete(client: &RemoteClient, id: i64) -> Result<()> {
    api::courses::delete(client, id).await?;
    println!("Deleted course #{id}.");
    Ok(())
}

/// 学生用参与码加入课程
pub async fn join(client: &RemoteClient, code: &str) -> Result<()> {
    let message = api::courses::join(client, code).await?;
    println!("{message}");
    Ok(())
}

/// 教授整体设置课程学生名单
pub async fn set_students(client: &RemoteClient, id: i64, student_ids: Vec<i64>) -> Result<()> {
    let course = api::courses::set_students(client, id, student_ids).await?;
    println!(
        "Course #{} now has {} student(s).",
        course.id,
        course.students.len()
    );
    Ok(())
}
