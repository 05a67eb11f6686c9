use serde::Serialize;

use crate::models::users::entities::UserRole;

// 登录请求
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// 注册请求
//
// 后端要求重复一次密码做确认 (password2)。
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub role: UserRole,
}
