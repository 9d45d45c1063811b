use tracing::{info, warn};

use super::StudentService;
use crate::errors::{RecordsError, Result};
use crate::models::PersonRecord;
use crate::models::students::entities::Student;
use crate::utils::validate_person;

pub async fn create_student(
    service: &StudentService,
    student: PersonRecord,
    group_id: i64,
) -> Result<Student> {
    let storage = service.storage();
    let student = student.normalized();
    validate_person(&student)?;

    if storage.get_group_by_id(group_id).await?.is_none() {
        warn!(
            "Cannot add student {}: group {} not found",
            student.full_name(),
            group_id
        );
        return Err(RecordsError::not_found(format!("Group {group_id} not found")));
    }

    let student = storage.create_student(group_id, student).await?;
    info!(
        "Student {} added to group {} with id {}",
        student.full_name(),
        group_id,
        student.id
    );
    Ok(student)
}
