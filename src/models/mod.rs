//! 业务数据模型
//!
//! 与 `entity` 中的数据库实体分离，服务层只接触这里的类型。

pub mod common;
pub mod courses;
pub mod groups;
pub mod students;
pub mod teachers;

pub use common::{PersonRecord, RecordCounts};
