use tracing::{info, warn};

use super::TeacherService;
use crate::errors::Result;
use crate::models::PersonRecord;
use crate::models::teachers::entities::Teacher;
use crate::utils::validate_person;

pub async fn create_teacher(service: &TeacherService, teacher: PersonRecord) -> Result<Teacher> {
    let teacher = teacher.normalized();
    if let Err(e) = validate_person(&teacher) {
        warn!("Rejected teacher {:?}: {}", teacher.full_name(), e.message());
        return Err(e);
    }

    let teacher = service.storage().create_teacher(teacher).await?;
    info!("Teacher {} created with id {}", teacher.full_name(), teacher.id);
    Ok(teacher)
}
