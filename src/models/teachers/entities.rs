use serde::{Deserialize, Serialize};

use crate::models::PersonRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    // 教师ID
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        crate::models::common::person::full_name(self.first_name.as_deref(), &self.last_name)
    }

    pub fn to_record(&self) -> PersonRecord {
        PersonRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}
