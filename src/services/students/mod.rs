pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::PersonRecord;
use crate::models::students::{entities::Student, responses::StudentWithGroup};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 列出全部学生及其所属小组
    pub async fn list(&self) -> Result<Vec<StudentWithGroup>> {
        list::list_students(self).await
    }

    // 列出小组内的学生
    pub async fn list_by_group(&self, group_id: i64) -> Result<Vec<Student>> {
        list::list_students_by_group(self, group_id).await
    }

    pub async fn get(&self, student_id: i64) -> Result<Student> {
        get::get_student(self, student_id).await
    }

    pub async fn add(&self, student: PersonRecord, group_id: i64) -> Result<Student> {
        create::create_student(self, student, group_id).await
    }

    pub async fn update(&self, student_id: i64, student: PersonRecord) -> Result<Student> {
        update::update_student(self, student_id, student).await
    }

    pub async fn delete(&self, student_id: i64) -> Result<()> {
        delete::delete_student(self, student_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::requests::CourseRequest;
    use crate::models::groups::requests::GroupRequest;
    use crate::storage::sea_orm_storage::test_support::memory_storage;

    async fn setup() -> (StudentService, i64) {
        let storage = memory_storage().await;
        let course = storage
            .create_course(CourseRequest::new("Biochemistry", None))
            .await
            .unwrap();
        let teacher = storage
            .create_teacher(PersonRecord::new("Marie", "Curie"))
            .await
            .unwrap();
        let group = storage
            .create_group(GroupRequest::new("Chem 101", course.id, teacher.id))
            .await
            .unwrap();
        (StudentService::new(storage), group.id)
    }

    #[tokio::test]
    async fn test_add_and_list_with_group() {
        let (service, group_id) = setup().await;

        let alice = service
            .add(PersonRecord::new("Alice", "Smith"), group_id)
            .await
            .unwrap();
        assert_eq!(alice.group_id, group_id);

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].student.full_name(), "Alice Smith");
        assert_eq!(all[0].group.name, "Chem 101");

        let in_group = service.list_by_group(group_id).await.unwrap();
        assert_eq!(in_group, vec![alice]);
    }

    #[tokio::test]
    async fn test_add_to_missing_group() {
        let (service, group_id) = setup().await;

        let err = service
            .add(PersonRecord::new("Alice", "Smith"), group_id + 100)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(service.list().await.unwrap().is_empty());
        assert!(service.list_by_group(group_id + 100).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (service, group_id) = setup().await;

        let student = service
            .add(PersonRecord::new("Bob", "Builder"), group_id)
            .await
            .unwrap();
        let updated = service
            .update(student.id, PersonRecord::new("Robert", "Builder"))
            .await
            .unwrap();
        assert_eq!(updated.first_name.as_deref(), Some("Robert"));
        assert_eq!(updated.group_id, group_id);

        service.delete(student.id).await.unwrap();
        assert!(service.get(student.id).await.unwrap_err().is_not_found());
        assert!(service.delete(student.id).await.unwrap_err().is_not_found());
        assert!(service
            .update(student.id, PersonRecord::new("Bob", "Builder"))
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_student_rejected() {
        let (service, group_id) = setup().await;

        let err = service
            .add(PersonRecord::new("Bob\u{7}", "Builder"), group_id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }
}
