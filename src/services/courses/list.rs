use tracing::debug;

use super::CourseService;
use crate::errors::Result;
use crate::models::courses::entities::Course;

pub async fn list_courses(service: &CourseService) -> Result<Vec<Course>> {
    let courses = service.storage().list_courses().await?;
    debug!("Loaded {} courses", courses.len());
    Ok(courses)
}
