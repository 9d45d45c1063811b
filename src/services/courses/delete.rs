use tracing::{info, warn};

use super::CourseService;
use crate::errors::{RecordsError, Result};

pub async fn delete_course(service: &CourseService, course_id: i64) -> Result<()> {
    let storage = service.storage();

    if storage.get_course_by_id(course_id).await?.is_none() {
        warn!("Cannot delete course {}: not found", course_id);
        return Err(RecordsError::not_found(format!("Course {course_id} not found")));
    }

    // 仍有小组引用时不允许删除
    let groups = storage.count_groups_by_course(course_id).await?;
    if groups > 0 {
        warn!("Cannot delete course {}: referenced by {} group(s)", course_id, groups);
        return Err(RecordsError::conflict(format!(
            "Course {course_id} is used by {groups} group(s)"
        )));
    }

    storage.delete_course(course_id).await?;
    info!("Course {} deleted", course_id);
    Ok(())
}
