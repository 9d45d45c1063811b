pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::{entities::Course, requests::CourseRequest};
use crate::storage::Storage;

pub struct CourseService {
    storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 列出全部课程
    pub async fn list(&self) -> Result<Vec<Course>> {
        list::list_courses(self).await
    }

    // 根据课程 ID 获取课程
    pub async fn get(&self, course_id: i64) -> Result<Course> {
        get::get_course(self, course_id).await
    }

    pub async fn add(&self, course: CourseRequest) -> Result<Course> {
        create::create_course(self, course).await
    }

    // 整体替换课程名称和描述
    pub async fn update(&self, course_id: i64, course: CourseRequest) -> Result<Course> {
        update::update_course(self, course_id, course).await
    }

    // 删除课程，仍被小组引用时拒绝
    pub async fn delete(&self, course_id: i64) -> Result<()> {
        delete::delete_course(self, course_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::groups::requests::GroupRequest;
    use crate::models::PersonRecord;
    use crate::storage::sea_orm_storage::test_support::memory_storage;

    #[tokio::test]
    async fn test_add_list_update() {
        let service = CourseService::new(memory_storage().await);

        let chem = service
            .add(CourseRequest::new("  Biochemistry ", Some("Enzymes")))
            .await
            .unwrap();
        assert_eq!(chem.name, "Biochemistry");
        service
            .add(CourseRequest::new("Physics", None))
            .await
            .unwrap();

        let names: Vec<_> = service.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Biochemistry", "Physics"]);

        let updated = service
            .update(chem.id, CourseRequest::new("Organic Chemistry", Some("")))
            .await
            .unwrap();
        assert_eq!(updated.name, "Organic Chemistry");
        assert_eq!(updated.description, None);
        assert_eq!(service.get(chem.id).await.unwrap().name, "Organic Chemistry");
    }

    #[tokio::test]
    async fn test_missing_course() {
        let service = CourseService::new(memory_storage().await);

        assert!(service.get(42).await.unwrap_err().is_not_found());
        assert!(service
            .update(42, CourseRequest::new("Physics", None))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(service.delete(42).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_name() {
        let service = CourseService::new(memory_storage().await);

        let err = service.add(CourseRequest::new("   ", None)).await.unwrap_err();
        assert_eq!(err.code(), "E005");
        let err = service
            .add(CourseRequest::new("x".repeat(101), None))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[tokio::test]
    async fn test_delete_referenced_course_conflicts() {
        let storage = memory_storage().await;
        let service = CourseService::new(storage.clone());

        let course = service.add(CourseRequest::new("Biochemistry", None)).await.unwrap();
        let spare = service.add(CourseRequest::new("Physics", None)).await.unwrap();
        let teacher = storage
            .create_teacher(PersonRecord::new("Ada", "Lovelace"))
            .await
            .unwrap();
        storage
            .create_group(GroupRequest::new("Chem 101", course.id, teacher.id))
            .await
            .unwrap();

        assert!(service.delete(course.id).await.unwrap_err().is_conflict());
        assert!(service.get(course.id).await.is_ok());

        service.delete(spare.id).await.unwrap();
        assert!(service.get(spare.id).await.unwrap_err().is_not_found());
    }
}
