use tracing::{info, warn};

use super::GroupService;
use super::create::check_group_request;
use super::list::find_group;
use crate::errors::{RecordsError, Result};
use crate::models::groups::{entities::Group, requests::GroupRequest};

pub async fn update_group(
    service: &GroupService,
    group_id: i64,
    group: GroupRequest,
) -> Result<Group> {
    find_group(service, group_id).await?;

    let group = group.normalized();
    check_group_request(service, &group, Some(group_id)).await?;

    match service.storage().update_group(group_id, group).await? {
        Some(group) => {
            info!("Group {} updated", group_id);
            Ok(group)
        }
        None => {
            warn!("Group {} disappeared during update", group_id);
            Err(RecordsError::not_found(format!("Group {group_id} not found")))
        }
    }
}
