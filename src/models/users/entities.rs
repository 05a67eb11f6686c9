use serde::{Deserialize, Serialize};

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,   // 学生
    Professor, // 教授
    Admin,     // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const PROFESSOR: &'static str = "professor";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [UserRole] {
        &[Self::Admin]
    }
    // 服务端对课程/作业变更与评分只认教授本人，管理员不在其列
    pub fn professor_roles() -> &'static [UserRole] {
        &[Self::Professor]
    }
    // 公告的发布/修改对教授和管理员都开放
    pub fn staff_roles() -> &'static [UserRole] {
        &[Self::Professor, Self::Admin]
    }
    pub fn all_roles() -> &'static [UserRole] {
        &[Self::Student, Self::Professor, Self::Admin]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::PROFESSOR => Ok(UserRole::Professor),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, professor, admin"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Professor => write!(f, "{}", UserRole::PROFESSOR),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "professor" => Ok(UserRole::Professor),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "alice", "email": "alice@example.com", "role": "professor"}"#,
        )
        .expect("valid user JSON");
        assert_eq!(user.role, UserRole::Professor);
        assert_eq!(user.role.to_string(), "professor");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result = serde_json::from_str::<User>(
            r#"{"id": 1, "username": "bob", "email": "bob@example.com", "role": "superuser"}"#,
        );
        assert!(result.is_err());
    }
}
