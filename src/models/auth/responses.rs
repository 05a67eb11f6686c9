use serde::{Deserialize, Serialize};

// 登录响应：访问令牌 + 刷新令牌
//
// 两个令牌对客户端都是不透明字符串；刷新流程由服务端负责，
// 客户端只负责保存并随请求附带访问令牌。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

// 注册成功后服务端回显的用户信息（不含 id，密码字段只写不读）
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
    pub email: String,
    pub role: crate::models::users::entities::UserRole,
}
