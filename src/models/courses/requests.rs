use serde::Serialize;

// 创建/修改课程请求
#[derive(Debug, Clone, Serialize)]
pub struct CourseRequest {
    pub name: String,
}

// 参与码加入课程请求
// POST /courses/join
#[derive(Debug, Clone, Serialize)]
pub struct JoinCourseRequest {
    pub join_code: String,
}

// 教授设置课程学生名单请求
// POST /courses/{id}/students
#[derive(Debug, Clone, Serialize)]
pub struct SetStudentsRequest {
    pub student_ids: Vec<i64>,
}
