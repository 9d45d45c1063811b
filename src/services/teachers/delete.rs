use tracing::{info, warn};

use super::TeacherService;
use crate::errors::{RecordsError, Result};

pub async fn delete_teacher(service: &TeacherService, teacher_id: i64) -> Result<()> {
    let storage = service.storage();

    if storage.get_teacher_by_id(teacher_id).await?.is_none() {
        warn!("Cannot delete teacher {}: not found", teacher_id);
        return Err(RecordsError::not_found(format!("Teacher {teacher_id} not found")));
    }

    let groups = storage.count_groups_by_teacher(teacher_id).await?;
    if groups > 0 {
        warn!("Cannot delete teacher {}: assigned to a group", teacher_id);
        return Err(RecordsError::conflict(format!(
            "Teacher {teacher_id} is assigned to a group"
        )));
    }

    storage.delete_teacher(teacher_id).await?;
    info!("Teacher {} deleted", teacher_id);
    Ok(())
}
