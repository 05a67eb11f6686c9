//! 界面层
//!
//! 每个模块对应一族界面：挂载即拉取（可并发）、渲染列表或详情、
//! 用户动作触发下一次远程调用。展示状态一律经由 status 模块推导。

pub mod admin;
pub mod assignments;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod notices;
pub mod notifications;
mod optimistic;
pub mod submissions;

pub use optimistic::OptimisticUpdate;
