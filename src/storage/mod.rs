use std::sync::Arc;

use crate::config::{AppConfig, DatabaseConfig};
use crate::models::{
    PersonRecord, RecordCounts,
    courses::{entities::Course, requests::CourseRequest},
    groups::{entities::Group, requests::GroupRequest},
    students::{entities::Student, responses::StudentWithGroup},
    teachers::entities::Teacher,
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 持久化层接口
///
/// 只负责读写，不做业务规则校验；唯一性与依赖检查由服务层完成，
/// 数据库约束作为最后一道保障。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 列出全部课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 创建课程
    async fn create_course(&self, course: CourseRequest) -> Result<Course>;
    // 整体替换课程信息
    async fn update_course(&self, course_id: i64, update: CourseRequest)
    -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>>;
    async fn create_teacher(&self, teacher: PersonRecord) -> Result<Teacher>;
    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: PersonRecord,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, teacher_id: i64) -> Result<bool>;

    /// 学生管理方法
    // 列出全部学生及其小组
    async fn list_students_with_group(&self) -> Result<Vec<StudentWithGroup>>;
    // 列出小组内的学生（按ID排序）
    async fn list_students_by_group(&self, group_id: i64) -> Result<Vec<Student>>;
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    async fn create_student(&self, group_id: i64, student: PersonRecord) -> Result<Student>;
    async fn update_student(
        &self,
        student_id: i64,
        update: PersonRecord,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, student_id: i64) -> Result<bool>;

    /// 小组管理方法
    async fn list_groups(&self) -> Result<Vec<Group>>;
    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>>;
    // 同一课程内同名小组，可排除指定小组
    async fn find_group_by_name_in_course(
        &self,
        name: &str,
        course_id: i64,
        exclude_group_id: Option<i64>,
    ) -> Result<Option<Group>>;
    // 教师负责的小组，可排除指定小组
    async fn find_group_by_teacher(
        &self,
        teacher_id: i64,
        exclude_group_id: Option<i64>,
    ) -> Result<Option<Group>>;
    async fn count_groups_by_course(&self, course_id: i64) -> Result<u64>;
    async fn count_groups_by_teacher(&self, teacher_id: i64) -> Result<u64>;
    async fn count_students_in_group(&self, group_id: i64) -> Result<u64>;
    async fn create_group(&self, group: GroupRequest) -> Result<Group>;
    async fn update_group(&self, group_id: i64, update: GroupRequest) -> Result<Option<Group>>;
    async fn delete_group(&self, group_id: i64) -> Result<bool>;
    // 移除小组内全部学生，返回移除数量
    async fn clear_group_students(&self, group_id: i64) -> Result<u64>;
    // 在同一事务中清空并重建小组名单，返回 (移除数量, 新学生)
    async fn replace_group_students(
        &self,
        group_id: i64,
        students: Vec<PersonRecord>,
    ) -> Result<(u64, Vec<Student>)>;

    /// 统计
    async fn count_records(&self) -> Result<RecordCounts>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    create_storage_with(&AppConfig::get().database).await
}

pub async fn create_storage_with(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
