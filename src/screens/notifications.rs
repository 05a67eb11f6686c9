use crate::api;
use crate::client::RemoteClient;
use crate::errors::Result;
use crate::render::{self, Table};

/// 通知列表
pub async fn list(client: &RemoteClient) -> Result<()> {
    let notifications = api::notifications::list(client).await?;
    if notifications.is_empty() {
        println!("No notifications.");
        return Ok(());
    }
    let mut table = Table::new(&["ID", "", "Message", "Created"]);
    for n in &notifications {
        table.add_row(vec![
            n.id.to_string(),
            if n.is_read { " ".to_string() } else { "*".to_string() },
            n.message.clone(),
            render::format_datetime(&n.created_at),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// 标记已读
pub async fn mark_read(client: &RemoteClient, id: i64) -> Result<()> {
    api::notifications::mark_read(client, id).await?;
    println!("Notification #{id} marked as read.");
    Ok(())
}
