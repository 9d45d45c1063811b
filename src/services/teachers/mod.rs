pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::PersonRecord;
use crate::models::teachers::entities::Teacher;
use crate::storage::Storage;

pub struct TeacherService {
    storage: Arc<dyn Storage>,
}

impl TeacherService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn list(&self) -> Result<Vec<Teacher>> {
        list::list_teachers(self).await
    }

    pub async fn get(&self, teacher_id: i64) -> Result<Teacher> {
        get::get_teacher(self, teacher_id).await
    }

    pub async fn add(&self, teacher: PersonRecord) -> Result<Teacher> {
        create::create_teacher(self, teacher).await
    }

    pub async fn update(&self, teacher_id: i64, teacher: PersonRecord) -> Result<Teacher> {
        update::update_teacher(self, teacher_id, teacher).await
    }

    // 删除教师，仍负责小组时拒绝
    pub async fn delete(&self, teacher_id: i64) -> Result<()> {
        delete::delete_teacher(self, teacher_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::requests::CourseRequest;
    use crate::models::groups::requests::GroupRequest;
    use crate::storage::sea_orm_storage::test_support::memory_storage;

    #[tokio::test]
    async fn test_add_without_first_name() {
        let service = TeacherService::new(memory_storage().await);

        let teacher = service
            .add(PersonRecord {
                first_name: None,
                last_name: "Curie".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(teacher.full_name(), "Curie");

        let teachers = service.list().await.unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].id, teacher.id);
    }

    #[tokio::test]
    async fn test_update_replaces_names() {
        let service = TeacherService::new(memory_storage().await);

        let teacher = service.add(PersonRecord::new("Ada", "Byron")).await.unwrap();
        let updated = service
            .update(teacher.id, PersonRecord::new("Ada", "Lovelace"))
            .await
            .unwrap();
        assert_eq!(updated.full_name(), "Ada Lovelace");

        let err = service
            .update(teacher.id + 1, PersonRecord::new("Ada", "Lovelace"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_missing_last_name_rejected() {
        let service = TeacherService::new(memory_storage().await);

        let err = service.add(PersonRecord::new("Ada", " ")).await.unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_assigned_teacher_conflicts() {
        let storage = memory_storage().await;
        let service = TeacherService::new(storage.clone());

        let teacher = service.add(PersonRecord::new("Ada", "Lovelace")).await.unwrap();
        let course = storage
            .create_course(CourseRequest::new("Mathematics", None))
            .await
            .unwrap();
        let group = storage
            .create_group(GroupRequest::new("Math 1", course.id, teacher.id))
            .await
            .unwrap();

        assert!(service.delete(teacher.id).await.unwrap_err().is_conflict());

        storage.delete_group(group.id).await.unwrap();
        service.delete(teacher.id).await.unwrap();
        assert!(service.delete(teacher.id).await.unwrap_err().is_not_found());
    }
}
