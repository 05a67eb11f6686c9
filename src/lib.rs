//! Assignment CLI - 作业管理系统终端前端
//!
//! 面向作业管理平台 REST API 的命令行客户端。
//!
//! # 架构
//! - `api`: 各资源的远程端点封装
//! - `cli`: 命令行定义与角色声明
//! - `client`: HTTP 客户端（凭证附带、错误归类）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `render`: 终端输出（表格、时间格式化）
//! - `screens`: 界面层（每个命令一个视图）
//! - `session`: 凭证持久化与会话状态
//! - `status`: 提交状态与截止规则推导（纯函数）
//! - `utils`: 工具函数

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod screens;
pub mod session;
pub mod status;
pub mod utils;
