use serde::Serialize;

use super::entities::Group;
use crate::models::{courses::entities::Course, students::entities::Student, teachers::entities::Teacher};

// 小组详情：课程、教师和学生名单一并加载
#[derive(Debug, Clone, Serialize)]
pub struct GroupDetail {
    pub group: Group,
    pub course: Course,
    pub teacher: Teacher,
    pub students: Vec<Student>,
}

// 名单导入结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentImportSummary {
    pub group_id: i64,
    // 导入前被移除的学生数
    pub removed: u64,
    // 新导入的学生数
    pub imported: usize,
}
