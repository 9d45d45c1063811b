use serde::Deserialize;

// 创建 / 更新课程请求（更新为整体替换）
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CourseRequest {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }

    /// 去除首尾空白，空描述视为未填写
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self
                .description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
