//! 小组管理
//!
//! 除基本增删改查外，还负责名单的清空、CSV 导入导出和文档生成。
//! 唯一性规则（同一课程内小组名唯一、每位教师最多负责一个小组）
//! 在这里先行检查，数据库约束兜底。

pub mod clear;
pub mod create;
pub mod delete;
pub mod document;
pub mod export;
pub mod import;
pub mod list;
pub mod update;

use std::path::Path;
use std::sync::Arc;

use crate::config::TransferConfig;
use crate::documents::DocumentFormat;
use crate::errors::Result;
use crate::models::groups::{
    entities::Group,
    requests::GroupRequest,
    responses::{GroupDetail, StudentImportSummary},
};
use crate::storage::Storage;

pub struct GroupService {
    storage: Arc<dyn Storage>,
    transfer: TransferConfig,
}

impl GroupService {
    pub fn new(storage: Arc<dyn Storage>, transfer: TransferConfig) -> Self {
        Self { storage, transfer }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn transfer(&self) -> &TransferConfig {
        &self.transfer
    }

    // 列出全部小组，附带课程、教师和学生名单
    pub async fn list(&self) -> Result<Vec<GroupDetail>> {
        list::list_groups(self).await
    }

    pub async fn get(&self, group_id: i64) -> Result<GroupDetail> {
        list::get_group(self, group_id).await
    }

    pub async fn create(&self, group: GroupRequest) -> Result<Group> {
        create::create_group(self, group).await
    }

    pub async fn update(&self, group_id: i64, group: GroupRequest) -> Result<Group> {
        update::update_group(self, group_id, group).await
    }

    // 删除小组，仍有学生时拒绝
    pub async fn delete(&self, group_id: i64) -> Result<()> {
        delete::delete_group(self, group_id).await
    }

    // 移除小组内全部学生，返回移除数量
    pub async fn clear(&self, group_id: i64) -> Result<u64> {
        clear::clear_group(self, group_id).await
    }

    // 导出小组名单到 CSV 文件，返回写出的行数
    pub async fn export_students(&self, group_id: i64, destination: &Path) -> Result<usize> {
        export::export_students(self, group_id, destination).await
    }

    // 用 CSV 文件整体替换小组名单
    pub async fn import_students(
        &self,
        group_id: i64,
        source: &Path,
    ) -> Result<StudentImportSummary> {
        import::import_students(self, group_id, source).await
    }

    // 生成小组名单文档
    pub async fn generate_document(
        &self,
        group_id: i64,
        destination: &Path,
        format: DocumentFormat,
    ) -> Result<()> {
        document::generate_document(self, group_id, destination, format).await
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use super::GroupService;
    use crate::config::TransferConfig;
    use crate::models::PersonRecord;
    use crate::models::courses::{entities::Course, requests::CourseRequest};
    use crate::models::teachers::entities::Teacher;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::memory_storage;

    pub(crate) struct Fixture {
        pub storage: Arc<dyn Storage>,
        pub service: GroupService,
        pub course: Course,
        pub other_course: Course,
        pub teacher: Teacher,
        pub other_teacher: Teacher,
    }

    pub(crate) async fn fixture() -> Fixture {
        let storage = memory_storage().await;
        let course = storage
            .create_course(CourseRequest::new("Biochemistry", None))
            .await
            .unwrap();
        let other_course = storage
            .create_course(CourseRequest::new("Physics", None))
            .await
            .unwrap();
        let teacher = storage
            .create_teacher(PersonRecord::new("Marie", "Curie"))
            .await
            .unwrap();
        let other_teacher = storage
            .create_teacher(PersonRecord::new("Niels", "Bohr"))
            .await
            .unwrap();

        Fixture {
            service: GroupService::new(storage.clone(), TransferConfig::default()),
            storage,
            course,
            other_course,
            teacher,
            other_teacher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::fixture;
    use crate::models::PersonRecord;
    use crate::models::groups::requests::GroupRequest;

    #[tokio::test]
    async fn test_create_and_get_detail() {
        let fx = fixture().await;

        let group = fx
            .service
            .create(GroupRequest::new(" Chem 101 ", fx.course.id, fx.teacher.id))
            .await
            .unwrap();
        assert_eq!(group.name, "Chem 101");

        fx.storage
            .create_student(group.id, PersonRecord::new("Alice", "Smith"))
            .await
            .unwrap();

        let detail = fx.service.get(group.id).await.unwrap();
        assert_eq!(detail.course.name, "Biochemistry");
        assert_eq!(detail.teacher.full_name(), "Marie Curie");
        assert_eq!(detail.students.len(), 1);

        let all = fx.service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].group, group);
        assert_eq!(all[0].students[0].full_name(), "Alice Smith");
    }

    #[tokio::test]
    async fn test_duplicate_name_in_course_conflicts() {
        let fx = fixture().await;

        fx.service
            .create(GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id))
            .await
            .unwrap();

        let err = fx
            .service
            .create(GroupRequest::new("Chem 101", fx.course.id, fx.other_teacher.id))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        // 不同课程可以同名
        fx.service
            .create(GroupRequest::new("Chem 101", fx.other_course.id, fx.other_teacher.id))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_teacher_bound_elsewhere_conflicts() {
        let fx = fixture().await;

        fx.service
            .create(GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id))
            .await
            .unwrap();
        let other = fx
            .service
            .create(GroupRequest::new("Phys 1", fx.other_course.id, fx.other_teacher.id))
            .await
            .unwrap();

        let err = fx
            .service
            .create(GroupRequest::new("Chem 102", fx.course.id, fx.teacher.id))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        let err = fx
            .service
            .update(other.id, GroupRequest::new("Phys 1", fx.other_course.id, fx.teacher.id))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_update_excludes_self() {
        let fx = fixture().await;

        let group = fx
            .service
            .create(GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id))
            .await
            .unwrap();

        let updated = fx
            .service
            .update(group.id, GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id))
            .await
            .unwrap();
        assert_eq!(updated.id, group.id);

        let moved = fx
            .service
            .update(group.id, GroupRequest::new("Chem 1", fx.other_course.id, fx.teacher.id))
            .await
            .unwrap();
        assert_eq!(moved.course_id, fx.other_course.id);
        assert_eq!(moved.name, "Chem 1");
    }

    #[tokio::test]
    async fn test_missing_references() {
        let fx = fixture().await;

        let err = fx
            .service
            .create(GroupRequest::new("Chem 101", fx.course.id + 100, fx.teacher.id))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = fx
            .service
            .create(GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id + 100))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = fx
            .service
            .update(999, GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(fx.service.get(999).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_name_rejected() {
        let fx = fixture().await;

        let err = fx
            .service
            .create(GroupRequest::new("", fx.course.id, fx.teacher.id))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[tokio::test]
    async fn test_delete_rules() {
        let fx = fixture().await;

        let group = fx
            .service
            .create(GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id))
            .await
            .unwrap();
        fx.storage
            .create_student(group.id, PersonRecord::new("Alice", "Smith"))
            .await
            .unwrap();

        assert!(fx.service.delete(group.id).await.unwrap_err().is_conflict());

        assert_eq!(fx.service.clear(group.id).await.unwrap(), 1);
        fx.service.delete(group.id).await.unwrap();
        assert!(fx.service.get(group.id).await.unwrap_err().is_not_found());
        assert!(fx.service.delete(group.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_clear_policy() {
        let fx = fixture().await;

        let group = fx
            .service
            .create(GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id))
            .await
            .unwrap();
        for (first, last) in [("Alice", "Smith"), ("Bob", "Builder")] {
            fx.storage
                .create_student(group.id, PersonRecord::new(first, last))
                .await
                .unwrap();
        }

        assert_eq!(fx.service.clear(group.id).await.unwrap(), 2);
        assert_eq!(fx.service.clear(group.id).await.unwrap(), 0);
        assert!(fx.service.clear(group.id + 1).await.unwrap_err().is_not_found());
    }
}
