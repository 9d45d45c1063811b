use tracing::warn;

use super::StudentService;
use crate::errors::{RecordsError, Result};
use crate::models::students::entities::Student;

pub async fn get_student(service: &StudentService, student_id: i64) -> Result<Student> {
    match service.storage().get_student_by_id(student_id).await? {
        Some(student) => Ok(student),
        None => {
            warn!("Student {} not found", student_id);
            Err(RecordsError::not_found(format!("Student {student_id} not found")))
        }
    }
}
