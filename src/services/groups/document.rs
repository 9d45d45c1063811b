use std::path::Path;

use tracing::info;

use super::GroupService;
use super::list::{find_group, load_detail};
use crate::documents::{self, DocumentFormat, Roster};
use crate::errors::{RecordsError, Result};
use crate::models::groups::responses::GroupDetail;

pub async fn generate_document(
    service: &GroupService,
    group_id: i64,
    destination: &Path,
    format: DocumentFormat,
) -> Result<()> {
    let group = find_group(service, group_id).await?;
    let detail = load_detail(service, group).await?;
    let roster = roster_of(&detail);

    let bytes = documents::render(format, &roster)?;
    tokio::fs::write(destination, bytes).await.map_err(|e| {
        RecordsError::file_operation(format!(
            "Failed to write {}: {e}",
            destination.display()
        ))
    })?;

    info!(
        "Generated {} roster for group {} at {}",
        format,
        group_id,
        destination.display()
    );
    Ok(())
}

fn roster_of(detail: &GroupDetail) -> Roster {
    Roster {
        course_name: detail.course.name.clone(),
        group_name: detail.group.name.clone(),
        students: detail.students.iter().map(|s| s.full_name()).collect(),
    }
}
