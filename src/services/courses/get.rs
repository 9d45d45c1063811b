use tracing::warn;

use super::CourseService;
use crate::errors::{RecordsError, Result};
use crate::models::courses::entities::Course;

pub async fn get_course(service: &CourseService, course_id: i64) -> Result<Course> {
    match service.storage().get_course_by_id(course_id).await? {
        Some(course) => Ok(course),
        None => {
            warn!("Course {} not found", course_id);
            Err(RecordsError::not_found(format!("Course {course_id} not found")))
        }
    }
}
