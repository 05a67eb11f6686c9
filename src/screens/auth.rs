use std::io::Write;

use crate::client::RemoteClient;
use crate::errors::{ClientError, Result};
use crate::models::auth::requests::RegisterRequest;
use crate::models::users::entities::UserRole;
use crate::session::SessionStore;
use crate::utils::validate;

/// 获取密码：优先环境变量，否则交互式读取
///
/// 不从命令行参数读密码，避免出现在进程列表里。
pub fn read_password() -> Result<String> {
    if let Ok(password) = std::env::var("ASSIGNMENT_PASSWORD") {
        return Ok(password);
    }
    print!("Password: ");
    std::io::stdout().flush()?;
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(ClientError::validation("Password must not be empty"));
    }
    Ok(password)
}

pub async fn login(
    session: &SessionStore,
    client: &RemoteClient,
    username: &str,
) -> Result<()> {
    let password = read_password()?;
    let user = session.login(client, username, &password).await?;
    println!("Logged in as {} ({})", user.username, user.role);
    Ok(())
}

pub fn logout(session: &SessionStore) {
    session.logout();
    println!("Logged out.");
}

pub async fn register(
    session: &SessionStore,
    client: &RemoteClient,
    username: &str,
    email: &str,
    role: UserRole,
) -> Result<()> {
    validate::validate_username(username).map_err(ClientError::validation)?;
    validate::validate_email(email).map_err(ClientError::validation)?;
    let password = read_password()?;
    validate::validate_password(&password).map_err(ClientError::validation)?;

    let request = RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.clone(),
        password2: password,
        role,
    };
    let created = session.register(client, &request).await?;
    println!(
        "Registered {} ({}). Run `assignment-cli login {}` to sign in.",
        created.username, created.role, created.username
    );
    Ok(())
}

pub fn whoami(session: &SessionStore) -> Result<()> {
    let user = session.require_user()?;
    println!("{} <{}> role={}", user.username, user.email, user.role);
    Ok(())
}
