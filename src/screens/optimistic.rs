//! 乐观更新命令对象
//!
//! 显式携带 (先前快照, 已应用快照, 远程操作)：远程成功则保留已应用
//! 快照，失败则原子地回退到先前快照，界面始终与最后一次确认的
//! 服务端状态一致。

use std::future::Future;

/// 一次乐观更新
pub struct OptimisticUpdate<T: Clone> {
    prior: T,
    applied: T,
}

impl<T: Clone> OptimisticUpdate<T> {
    /// 记录先前快照并应用新快照
    pub fn new(prior: T, applied: T) -> Self {
        Self { prior, applied }
    }

    /// 执行远程操作并据结果决定保留还是回退
    ///
    /// 返回 (最终快照, 远程结果)；最终快照要么是已应用快照
    /// （远程成功），要么是先前快照（远程失败，已回退）。
    pub async fn commit<F, Fut, E>(self, op: F) -> (T, Result<(), E>)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        match op().await {
            Ok(()) => (self.applied, Ok(())),
            Err(e) => (self.prior, Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;
    use crate::models::users::entities::{User, UserRole};

    fn user_list() -> Vec<User> {
        vec![
            User {
                id: 1,
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                role: UserRole::Student,
            },
            User {
                id: 2,
                username: "bob".to_string(),
                email: "bob@example.com".to_string(),
                role: UserRole::Professor,
            },
        ]
    }

    fn with_role(users: &[User], id: i64, role: UserRole) -> Vec<User> {
        users
            .iter()
            .map(|u| {
                let mut u = u.clone();
                if u.id == id {
                    u.role = role;
                }
                u
            })
            .collect()
    }

    #[tokio::test]
    async fn test_success_keeps_applied_snapshot() {
        let prior = user_list();
        let applied = with_role(&prior, 1, UserRole::Professor);
        let update = OptimisticUpdate::new(prior, applied.clone());

        let (state, outcome) = update
            .commit(|| async { Ok::<(), ClientError>(()) })
            .await;

        assert!(outcome.is_ok());
        assert_eq!(state, applied);
        assert_eq!(state[0].role, UserRole::Professor);
    }

    #[tokio::test]
    async fn test_conflict_rolls_back_to_prior_snapshot() {
        // 学生被乐观地改成教授，远程返回冲突：必须精确回到先前快照
        let prior = user_list();
        let applied = with_role(&prior, 1, UserRole::Professor);
        let update = OptimisticUpdate::new(prior.clone(), applied);

        let (state, outcome) = update
            .commit(|| async {
                Err::<(), ClientError>(ClientError::validation("Role conflict"))
            })
            .await;

        assert!(outcome.is_err());
        assert_eq!(state, prior);
        assert_eq!(state[0].role, UserRole::Student);
    }
}
