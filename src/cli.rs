//! 命令行定义
//!
//! 每个子命令对应一个界面。命令所需的角色在这里声明，
//! 由 main 在分发前检查一次；界面内部不再重复判断角色。

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::users::entities::UserRole;

fn parse_role(raw: &str) -> Result<UserRole, String> {
    raw.parse()
}

#[derive(Parser)]
#[command(name = "assignment-cli", version, about = "Terminal front-end for the assignment management system")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// 登录（密码从 ASSIGNMENT_PASSWORD 或交互输入读取）
    Login { username: String },
    /// 登出：清除本地凭证，不发远程请求
    Logout,
    /// 注册新账号
    Register {
        username: String,
        email: String,
        #[arg(long, default_value = "student", value_parser = parse_role)]
        role: UserRole,
    },
    /// 查看当前登录身份
    Whoami,
    /// 角色仪表盘
    Dashboard,
    /// 课程
    #[command(subcommand)]
    Courses(CourseAction),
    /// 作业
    #[command(subcommand)]
    Assignments(AssignmentAction),
    /// 首次提交作业
    Submit {
        assignment_id: i64,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        message: Option<String>,
    },
    /// 修改（重新提交）已有提交
    Resubmit {
        submission_id: i64,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        message: Option<String>,
    },
    /// 我的全部提交
    MySubmissions,
    /// 某作业下的全部提交（教授）
    Submissions { assignment_id: i64 },
    /// 评分（教授）
    Grade {
        assignment_id: i64,
        submission_id: i64,
        #[arg(long)]
        score: i32,
        #[arg(long)]
        feedback: Option<String>,
    },
    /// 公告板
    #[command(subcommand)]
    Notices(NoticeAction),
    /// 通知
    #[command(subcommand)]
    Notifications(NotificationAction),
    /// 管理员操作
    #[command(subcommand)]
    Admin(AdminAction),
}

#[derive(Subcommand)]
pub enum CourseAction {
    /// 我的课程列表
    List,
    /// 课程详情（名单与作业）
    Show { id: i64 },
    /// 创建课程（教授）
    Create { name: String },
    /// 课程改名（教授）
    Update { id: i64, name: String },
    /// 删除课程（教授）
    Delete { id: i64 },
    /// 用参与码加入课程（学生）
    Join { code: String },
    /// 整体设置课程学生名单（教授）
    SetStudents {
        id: i64,
        student_ids: Vec<i64>,
    },
}

#[derive(Subcommand)]
pub enum AssignmentAction {
    /// 作业列表，可按课程过滤
    List {
        #[arg(long)]
        course: Option<i64>,
    },
    /// 作业详情（含本人提交状态）
    Show { id: i64 },
    /// 发布作业（教授）
    Create {
        #[arg(long)]
        course: i64,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// 截止时间：RFC 3339 或 'YYYY-MM-DD HH:MM' (UTC)
        #[arg(long)]
        due: String,
        #[arg(long)]
        allow_late: bool,
    },
    /// 修改作业（教授）
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        allow_late: Option<bool>,
    },
    /// 删除作业（教授）
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum NoticeAction {
    List,
    Show { id: i64 },
    /// 发布公告（教授/管理员）
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum NotificationAction {
    List,
    /// 标记通知已读
    Read { id: i64 },
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// 用户列表
    Users,
    /// 修改用户角色（乐观更新，失败回退）
    SetRole {
        user_id: i64,
        #[arg(value_parser = parse_role)]
        role: UserRole,
    },
    /// 全站统计
    Stats,
    /// 操作日志
    Logs,
}

impl Command {
    /// 命令要求的角色；None 表示无需登录
    pub fn required_roles(&self) -> Option<&'static [UserRole]> {
        match self {
            Command::Login { .. } | Command::Logout | Command::Register { .. } => None,
            Command::Whoami
            | Command::Dashboard
            | Command::Notifications(_) => Some(UserRole::all_roles()),
            Command::Courses(action) => match action {
                CourseAction::List | CourseAction::Show { .. } => Some(UserRole::all_roles()),
                CourseAction::Join { .. } => Some(&[UserRole::Student]),
                _ => Some(UserRole::professor_roles()),
            },
            Command::Assignments(action) => match action {
                AssignmentAction::List { .. } | AssignmentAction::Show { .. } => {
                    Some(UserRole::all_roles())
                }
                _ => Some(UserRole::professor_roles()),
            },
            Command::Submit { .. } | Command::Resubmit { .. } | Command::MySubmissions => {
                Some(&[UserRole::Student])
            }
            Command::Submissions { .. } | Command::Grade { .. } => {
                Some(UserRole::professor_roles())
            }
            Command::Notices(action) => match action {
                NoticeAction::List | NoticeAction::Show { .. } => Some(UserRole::all_roles()),
                _ => Some(UserRole::staff_roles()),
            },
            Command::Admin(_) => Some(UserRole::admin_roles()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_commands_need_no_session() {
        let cmd = Command::Login {
            username: "alice".to_string(),
        };
        assert!(cmd.required_roles().is_none());
        assert!(Command::Logout.required_roles().is_none());
    }

    #[test]
    fn test_submit_is_student_only() {
        let cmd = Command::Submit {
            assignment_id: 1,
            file: None,
            message: None,
        };
        assert_eq!(cmd.required_roles(), Some(&[UserRole::Student][..]));
    }

    #[test]
    fn test_grade_is_professor_only() {
        // 服务端的评分与提交列表接口只对教授开放，管理员也会被 403
        let cmd = Command::Grade {
            assignment_id: 1,
            submission_id: 2,
            score: 90,
            feedback: None,
        };
        let roles = cmd.required_roles().expect("grading requires a role");
        assert!(roles.contains(&UserRole::Professor));
        assert!(!roles.contains(&UserRole::Admin));
        assert!(!roles.contains(&UserRole::Student));
        assert_eq!(
            Command::Submissions { assignment_id: 1 }.required_roles(),
            Some(&[UserRole::Professor][..])
        );
    }

    #[test]
    fn test_notice_mutation_allows_professor_and_admin() {
        let cmd = Command::Notices(NoticeAction::Delete { id: 1 });
        let roles = cmd.required_roles().expect("notice mutation requires a role");
        assert!(roles.contains(&UserRole::Professor));
        assert!(roles.contains(&UserRole::Admin));
        assert!(!roles.contains(&UserRole::Student));
    }

    #[test]
    fn test_admin_commands_are_admin_only() {
        let cmd = Command::Admin(AdminAction::Stats);
        assert_eq!(cmd.required_roles(), Some(&[UserRole::Admin][..]));
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
