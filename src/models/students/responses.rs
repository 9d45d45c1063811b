use serde::Serialize;

use super::entities::Student;
use crate::models::groups::entities::Group;

// 学生及其所属小组
#[derive(Debug, Clone, Serialize)]
pub struct StudentWithGroup {
    pub student: Student,
    pub group: Group,
}
