use tracing::{debug, info};

use super::GroupService;
use super::list::find_group;
use crate::errors::Result;

pub async fn clear_group(service: &GroupService, group_id: i64) -> Result<u64> {
    find_group(service, group_id).await?;

    let removed = service.storage().clear_group_students(group_id).await?;
    if removed == 0 {
        debug!("Group {} already empty", group_id);
    } else {
        info!("Removed {} student(s) from group {}", removed, group_id);
    }
    Ok(removed)
}
