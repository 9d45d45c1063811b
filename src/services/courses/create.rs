use tracing::{info, warn};

use super::CourseService;
use crate::errors::Result;
use crate::models::courses::{entities::Course, requests::CourseRequest};
use crate::utils::validate_course;

pub async fn create_course(service: &CourseService, course: CourseRequest) -> Result<Course> {
    let course = course.normalized();
    if let Err(e) = validate_course(&course) {
        warn!("Rejected course {:?}: {}", course.name, e.message());
        return Err(e);
    }

    let course = service.storage().create_course(course).await?;
    info!("Course {} created with id {}", course.name, course.id);
    Ok(course)
}
