use tracing::{info, warn};

use super::StudentService;
use crate::errors::{RecordsError, Result};
use crate::models::PersonRecord;
use crate::models::students::entities::Student;
use crate::utils::validate_person;

// 只替换姓名，所属小组不变
pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    student: PersonRecord,
) -> Result<Student> {
    let student = student.normalized();
    validate_person(&student)?;

    match service.storage().update_student(student_id, student).await? {
        Some(student) => {
            info!("Student {} updated", student_id);
            Ok(student)
        }
        None => {
            warn!("Cannot update student {}: not found", student_id);
            Err(RecordsError::not_found(format!("Student {student_id} not found")))
        }
    }
}
