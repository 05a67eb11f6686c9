use serde::{Deserialize, Serialize};

use crate::models::users::entities::User;

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 唯一 ID
    pub id: i64,
    // 课程名称
    pub name: String,
    // 开课教授的用户 ID
    pub professor: i64,
    // 已选课学生名单
    #[serde(default)]
    pub students: Vec<User>,
    // 参与码（服务端生成，客户端视为不透明令牌）
    #[serde(default)]
    pub join_code: Option<String>,
}
