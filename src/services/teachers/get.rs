use tracing::warn;

use super::TeacherService;
use crate::errors::{RecordsError, Result};
use crate::models::teachers::entities::Teacher;

pub async fn get_teacher(service: &TeacherService, teacher_id: i64) -> Result<Teacher> {
    match service.storage().get_teacher_by_id(teacher_id).await? {
        Some(teacher) => Ok(teacher),
        None => {
            warn!("Teacher {} not found", teacher_id);
            Err(RecordsError::not_found(format!("Teacher {teacher_id} not found")))
        }
    }
}
