use serde::Deserialize;

// 创建 / 更新小组请求（更新为整体替换）
#[derive(Debug, Clone, Deserialize)]
pub struct GroupRequest {
    pub name: String,
    pub course_id: i64,
    pub teacher_id: i64,
}

impl GroupRequest {
    pub fn new(name: impl Into<String>, course_id: i64, teacher_id: i64) -> Self {
        Self {
            name: name.into(),
            course_id,
            teacher_id,
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            ..self
        }
    }
}
