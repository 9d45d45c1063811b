use tracing::{info, warn};

use super::StudentService;
use crate::errors::{RecordsError, Result};

pub async fn delete_student(service: &StudentService, student_id: i64) -> Result<()> {
    if !service.storage().delete_student(student_id).await? {
        warn!("Cannot delete student {}: not found", student_id);
        return Err(RecordsError::not_found(format!("Student {student_id} not found")));
    }

    info!("Student {} deleted", student_id);
    Ok(())
}
