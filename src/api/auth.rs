use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::models::auth::responses::{RegisteredUser, TokenPair};
use crate::models::users::entities::User;

/// 用户名密码换取令牌对
/// POST /auth/login
pub async fn login(client: &RemoteClient, request: &LoginRequest) -> Result<TokenPair> {
    client.post("auth/login/", request).await
}

/// 注册新用户（一次性调用，不改动本地状态）
/// POST /auth/register
pub async fn register(client: &RemoteClient, request: &RegisterRequest) -> Result<RegisteredUser> {
    client.post("auth/register/", request).await
}

/// 解析当前凭证对应的身份
/// GET /auth/me
pub async fn me(client: &RemoteClient) -> Result<User> {
    client.get("auth/me/").await
}
