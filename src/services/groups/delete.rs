use tracing::{info, warn};

use super::GroupService;
use super::list::find_group;
use crate::errors::{RecordsError, Result};

pub async fn delete_group(service: &GroupService, group_id: i64) -> Result<()> {
    let group = find_group(service, group_id).await?;
    let storage = service.storage();

    let students = storage.count_students_in_group(group_id).await?;
    if students > 0 {
        warn!(
            "Cannot delete group {} ({}): {} student(s) enrolled",
            group_id, group.name, students
        );
        return Err(RecordsError::conflict(format!(
            "Group {:?} still has {students} student(s)",
            group.name
        )));
    }

    storage.delete_group(group_id).await?;
    info!("Group {} ({}) deleted", group_id, group.name);
    Ok(())
}
