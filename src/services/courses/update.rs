use tracing::{info, warn};

use super::CourseService;
use crate::errors::{RecordsError, Result};
use crate::models::courses::{entities::Course, requests::CourseRequest};
use crate::utils::validate_course;

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    course: CourseRequest,
) -> Result<Course> {
    let course = course.normalized();
    validate_course(&course)?;

    match service.storage().update_course(course_id, course).await? {
        Some(course) => {
            info!("Course {} updated", course_id);
            Ok(course)
        }
        None => {
            warn!("Cannot update course {}: not found", course_id);
            Err(RecordsError::not_found(format!("Course {course_id} not found")))
        }
    }
}
