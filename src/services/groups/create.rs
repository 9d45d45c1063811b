use tracing::{info, warn};

use super::GroupService;
use crate::errors::{RecordsError, Result};
use crate::models::groups::{entities::Group, requests::GroupRequest};
use crate::utils::validate_group_name;

pub async fn create_group(service: &GroupService, group: GroupRequest) -> Result<Group> {
    let group = group.normalized();
    check_group_request(service, &group, None).await?;

    let group = service.storage().create_group(group).await?;
    info!(
        "Group {} created with id {} (course {}, teacher {})",
        group.name, group.id, group.course_id, group.teacher_id
    );
    Ok(group)
}

/// 创建和更新共用的校验：名称、引用存在性和两条唯一性规则
///
/// 更新时传入 `exclude_group_id`，小组自身不算冲突。
pub(crate) async fn check_group_request(
    service: &GroupService,
    group: &GroupRequest,
    exclude_group_id: Option<i64>,
) -> Result<()> {
    let storage = service.storage();

    validate_group_name(&group.name)?;

    if storage.get_course_by_id(group.course_id).await?.is_none() {
        warn!("Group {:?} references missing course {}", group.name, group.course_id);
        return Err(RecordsError::not_found(format!(
            "Course {} not found",
            group.course_id
        )));
    }

    if storage.get_teacher_by_id(group.teacher_id).await?.is_none() {
        warn!("Group {:?} references missing teacher {}", group.name, group.teacher_id);
        return Err(RecordsError::not_found(format!(
            "Teacher {} not found",
            group.teacher_id
        )));
    }

    if let Some(existing) = storage
        .find_group_by_name_in_course(&group.name, group.course_id, exclude_group_id)
        .await?
    {
        warn!(
            "Group name {:?} already used in course {} by group {}",
            group.name, group.course_id, existing.id
        );
        return Err(RecordsError::conflict(format!(
            "Group {:?} already exists in course {}",
            group.name, group.course_id
        )));
    }

    if let Some(existing) = storage
        .find_group_by_teacher(group.teacher_id, exclude_group_id)
        .await?
    {
        warn!(
            "Teacher {} already assigned to group {}",
            group.teacher_id, existing.id
        );
        return Err(RecordsError::conflict(format!(
            "Teacher {} is already assigned to group {:?}",
            group.teacher_id, existing.name
        )));
    }

    Ok(())
}
