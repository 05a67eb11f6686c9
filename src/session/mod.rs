//! 会话管理
//!
//! `CredentialStore` 负责令牌对的持久化；`SessionStore` 持有当前登录
//! 身份，提供显式的 init（从持久化凭证恢复）与 logout（清除）生命周期。
//! 两者都通过参数注入消费方，不做全局单例。

mod credentials;
mod store;

pub use credentials::CredentialStore;
pub use store::SessionStore;
