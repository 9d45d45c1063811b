use tracing::{info, warn};

use super::TeacherService;
use crate::errors::{RecordsError, Result};
use crate::models::PersonRecord;
use crate::models::teachers::entities::Teacher;
use crate::utils::validate_person;

pub async fn update_teacher(
    service: &TeacherService,
    teacher_id: i64,
    teacher: PersonRecord,
) -> Result<Teacher> {
    let teacher = teacher.normalized();
    validate_person(&teacher)?;

    match service.storage().update_teacher(teacher_id, teacher).await? {
        Some(teacher) => {
            info!("Teacher {} updated", teacher_id);
            Ok(teacher)
        }
        None => {
            warn!("Cannot update teacher {}: not found", teacher_id);
            Err(RecordsError::not_found(format!("Teacher {teacher_id} not found")))
        }
    }
}
