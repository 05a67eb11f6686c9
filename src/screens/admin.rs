use crate::api;
use crate::client::RemoteClient;
use crate::errors::{ClientError, Result};
use crate::models::users::entities::{User, UserRole};
use crate::render::{self, Table};
use crate::screens::OptimisticUpdate;

/// 用户管理列表
pub async fn users(client: &RemoteClient) -> Result<()> {
    let users = api::admin::list_users(client).await?;
    println!("{}", user_table(&users));
    Ok(())
}

/// 修改用户角色
///
/// 对本地列表乐观应用；远程失败（如冲突）时精确回退到先前快照，
/// 渲染的列表始终与最后一次确认的服务端状态一致。
pub async fn set_role(client: &RemoteClient, user_id: i64, role: UserRole) -> Result<()> {
    let users = api::admin::list_users(client).await?;
    let target = users
        .iter()
        .find(|u| u.id == user_id)
        .ok_or_else(|| ClientError::not_found(format!("User {user_id} not found")))?;
    if target.role == role {
        println!("User {} already has role {role}.", target.username);
        return Ok(());
    }

    let applied: Vec<User> = users
        .iter()
        .map(|u| {
            let mut u = u.clone();
            if u.id == user_id {
                u.role = role;
            }
            u
        })
        .collect();

    let update = OptimisticUpdate::new(users, applied);
    let (state, outcome) = update
        .commit(|| async {
            api::admin::update_role(client, user_id, role)
                .await
                .map(|_| ())
        })
        .await;

    println!("{}", user_table(&state));
    match outcome {
        Ok(()) => {
            println!("Changed role of user #{user_id} to {role}.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// 全站统计
pub async fn stats(client: &RemoteClient) -> Result<()> {
    let stats = api::admin::stats(client).await?;
    println!("Users:       {}", stats.total_users);
    println!("Courses:     {}", stats.total_courses);
    println!("Assignments: {}", stats.total_assignments);
    println!("Submissions: {}", stats.total_submissions);
    Ok(())
}

/// 操作日志
pub async fn logs(client: &RemoteClient) -> Result<()> {
    let logs = api::admin::logs(client).await?;
    if logs.is_empty() {
        println!("No activity logged.");
        return Ok(());
    }
    let mut table = Table::new(&["Time", "Actor", "Action", "Details"]);
    for log in &logs {
        table.add_row(vec![
            render::format_datetime(&log.created_at),
            log.actor_username.clone(),
            log.action_type.clone(),
            log.details.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn user_table(users: &[User]) -> Table {
    let mut table = Table::new(&["ID", "Username", "Email", "Role"]);
    for user in users {
        table.add_row(vec![
            user.id.to_string(),
            user.username.clone(),
            user.email.clone(),
            user.role.to_string(),
        ]);
    }
    table
}
