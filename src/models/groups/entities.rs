use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    // 小组ID
    pub id: i64,
    // 小组名称（同一课程内唯一）
    pub name: String,
    // 所属课程ID
    pub course_id: i64,
    // 负责教师ID（一个教师最多负责一个小组）
    pub teacher_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
