use crate::api;
use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::notices::requests::NoticeRequest;
use crate::render::{self, Table};

/// 公告板
pub async fn list(client: &RemoteClient) -> Result<()> {
    let notices = api::notices::list(client).await?;
    if notices.is_empty() {
        println!("No notices.");
        return Ok(());
    }
    let mut table = Table::new(&["ID", "Title", "Author", "Created"]);
    for notice in &notices {
        table.add_row(vec![
            notice.id.to_string(),
            notice.title.clone(),
            notice
                .author_username
                .clone()
                .unwrap_or_else(|| format!("#{}", notice.author)),
            render::format_datetime(&notice.created_at),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// 公告详情
pub async fn show(client: &RemoteClient, id: i64) -> Result<()> {
    let notice = api::notices::get(client, id).await?;
    println!("#{} {}", notice.id, notice.title);
    println!(
        "by {} at {}\n",
        notice
            .author_username
            .unwrap_or_else(|| format!("#{}", notice.author)),
        render::format_datetime(&notice.created_at)
    );
    println!("{}", notice.content);
    Ok(())
}

/// 发布公告
pub async fn create(client: &RemoteClient, title: &str, content: &str) -> Result<()> {
    let notice = api::notices::create(
        client,
        &NoticeRequest {
            title: title.to_string(),
            content: content.to_string(),
        },
    )
    .await?;
    println!("Posted notice #{} '{}'", notice.id, notice.title);
    Ok(())
}

/// 修改公告
pub async fn update(client: &RemoteClient, id: i64, title: &str, content: &str) -> Result<()> {
    let notice = api::notices::update(
        client,
        id,
        &NoticeRequest {
            title: title.to_string(),
            content: content.to_string(),
        },
    )
    .await?;
    println!("Updated notice #{} '{}'", notice.id, notice.title);
    Ok(())
}

/// 删除公告
pub async fn delete(client: &RemoteClient, id: i64) -> Result<()> {
    api::notices::delete(client, id).await?;
    println!("Deleted notice #{id}.");
    Ok(())
}
