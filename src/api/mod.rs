//! 按资源划分的类型化 API 层
//!
//! 每个模块封装一组 REST 端点，所有请求经由 `RemoteClient` 发出。

pub mod admin;
pub mod assignments;
pub mod auth;
pub mod courses;
pub mod notices;
pub mod notifications;
pub mod submissions;
