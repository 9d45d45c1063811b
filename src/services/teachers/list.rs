use tracing::debug;

use super::TeacherService;
use crate::errors::Result;
use crate::models::teachers::entities::Teacher;

pub async fn list_teachers(service: &TeacherService) -> Result<Vec<Teacher>> {
    let teachers = service.storage().list_teachers().await?;
    debug!("Loaded {} teachers", teachers.len());
    Ok(teachers)
}
