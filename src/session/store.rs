use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::api;
use crate::client::RemoteClient;
use crate::errors::{ClientError, Result};
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::models::auth::responses::RegisteredUser;
use crate::models::users::entities::User;
use crate::session::CredentialStore;

/// 会话存储
///
/// 持有当前登录身份；身份只在 init/login 时解析，logout 时同步清除。
pub struct SessionStore {
    credentials: Arc<CredentialStore>,
    current_user: RwLock<Option<User>>,
}

impl SessionStore {
    pub fn new(credentials: Arc<CredentialStore>) -> Self {
        Self {
            credentials,
            current_user: RwLock::new(None),
        }
    }

    /// 启动时从持久化凭证恢复会话
    ///
    /// 存在凭证则调用 /auth/me 解析身份；失败时清除凭证并保持未登录。
    /// 这是系统里唯一的自动恢复行为。
    pub async fn init(&self, client: &RemoteClient) {
        if !self.credentials.is_present() {
            return;
        }
        match api::auth::me(client).await {
            Ok(user) => {
                debug!("Restored session for {}", user.username);
                *self.current_user.write().expect("session lock poisoned") = Some(user);
            }
            Err(e) => {
                debug!("Stored credential rejected, starting unauthenticated: {e}");
                self.credentials.clear();
            }
        }
    }

    /// 登录：换取令牌对、持久化、解析身份
    pub async fn login(&self, client: &RemoteClient, username: &str, password: &str) -> Result<User> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let pair = api::auth::login(client, &request).await?;
        self.credentials.store(pair)?;

        let user = api::auth::me(client).await?;
        info!("User {} logged in", user.username);
        *self.current_user.write().expect("session lock poisoned") = Some(user.clone());
        Ok(user)
    }

    /// 登出：同步清除令牌与身份，不发远程请求
    pub fn logout(&self) {
        self.credentials.clear();
        *self.current_user.write().expect("session lock poisoned") = None;
    }

    /// 注册：一次性远程调用，不改动本地会话状态
    pub async fn register(
        &self,
        client: &RemoteClient,
        request: &RegisterRequest,
    ) -> Result<RegisteredUser> {
        api::auth::register(client, request).await
    }

    /// 当前登录用户（未登录返回 None）
    pub fn current_user(&self) -> Option<User> {
        self.current_user
            .read()
            .expect("session lock poisoned")
            .clone()
    }

    /// 要求已登录，否则返回认证错误
    pub fn require_user(&self) -> Result<User> {
        self.current_user()
            .ok_or_else(|| ClientError::authentication("Not logged in. Run `assignment-cli login` first."))
    }
}
