use crate::client::RemoteClient;
use crate::errors::Result;
use crate::models::DetailMessage;
use crate::models::courses::entities::Course;
use crate::models::courses::requests::{CourseRequest, JoinCourseRequest, SetStudentsRequest};

/// 当前用户可见的课程列表（服务端按角色过滤）
/// GET /courses
pub async fn list(client: &RemoteClient) -> Result<Vec<Course>> {
    client.get("courses/").await
}

/// 课程详情（含学生名单）
/// GET /courses/{id}
pub async fn get(client: &RemoteClient, id: i64) -> Result<Course> {
    client.get(&format!("courses/{id}/")).await
}

/// 创建课程（教授）；参与码由服务端生成
/// POST /courses
pub async fn create(client: &RemoteClient, request: &CourseRequest) -> Result<Course> {
    client.post("courses/", request).await
}

/// 修改课程
/// PATCH /courses/{id}
pub async fn update(client: &RemoteClient, id: i64, request: &CourseRequest) -> Result<Course> {
    client.patch(&format!("courses/{id}/"), request).await
}

/// 删除课程
/// DELETE /courses/{id}
pub async fn delete(client: &RemoteClient, id: i64) -> Result<()> {
    client.delete(&format!("courses/{id}/")).await
}

/// 学生用参与码加入课程
/// POST /courses/join
pub async fn join(client: &RemoteClient, join_code: &str) -> Result<String> {
    let request = JoinCourseRequest {
        join_code: join_code.to_string(),
    };
    let response: DetailMessage = client.post("courses/join/", &request).await?;
    Ok(response.detail)
}

/// 教授整体设置课程学生名单
/// POST /courses/{id}/students
pub async fn set_students(
    client: &RemoteClient,
    id: i64,
    student_ids: Vec<i64>,
) -> Result<Course> {
    let request = SetStudentsRequest { student_ids };
    client.post(&format!("courses/{id}/students/"), &request).await
}
