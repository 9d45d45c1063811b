use tracing::{debug, warn};

use super::StudentService;
use crate::errors::{RecordsError, Result};
use crate::models::students::{entities::Student, responses::StudentWithGroup};

pub async fn list_students(service: &StudentService) -> Result<Vec<StudentWithGroup>> {
    let students = service.storage().list_students_with_group().await?;
    debug!("Loaded {} students", students.len());
    Ok(students)
}

pub async fn list_students_by_group(
    service: &StudentService,
    group_id: i64,
) -> Result<Vec<Student>> {
    let storage = service.storage();

    if storage.get_group_by_id(group_id).await?.is_none() {
        warn!("Cannot list students of group {}: not found", group_id);
        return Err(RecordsError::not_found(format!("Group {group_id} not found")));
    }

    storage.list_students_by_group(group_id).await
}
