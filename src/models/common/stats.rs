use serde::Serialize;

// 各表记录数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub courses: u64,
    pub teachers: u64,
    pub groups: u64,
    pub students: u64,
}
