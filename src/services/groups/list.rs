use std::collections::HashMap;

use tracing::{debug, warn};

use super::GroupService;
use crate::errors::{RecordsError, Result};
use crate::models::groups::{entities::Group, responses::GroupDetail};
use crate::models::students::entities::Student;

pub async fn list_groups(service: &GroupService) -> Result<Vec<GroupDetail>> {
    let storage = service.storage();

    let groups = storage.list_groups().await?;
    let courses: HashMap<_, _> = storage
        .list_courses()
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();
    let teachers: HashMap<_, _> = storage
        .list_teachers()
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();

    // 学生已按 ID 排序，分组后保持顺序
    let mut students: HashMap<i64, Vec<Student>> = HashMap::new();
    for row in storage.list_students_with_group().await? {
        students.entry(row.group.id).or_default().push(row.student);
    }

    let details = groups
        .into_iter()
        .map(|group| {
            let course = courses
                .get(&group.course_id)
                .cloned()
                .ok_or_else(|| missing_reference(&group, "course", group.course_id))?;
            let teacher = teachers
                .get(&group.teacher_id)
                .cloned()
                .ok_or_else(|| missing_reference(&group, "teacher", group.teacher_id))?;
            let students = students.remove(&group.id).unwrap_or_default();
            Ok(GroupDetail {
                group,
                course,
                teacher,
                students,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Loaded {} groups", details.len());
    Ok(details)
}

pub async fn get_group(service: &GroupService, group_id: i64) -> Result<GroupDetail> {
    let group = find_group(service, group_id).await?;
    load_detail(service, group).await
}

/// 获取小组，不存在时返回 NotFound
pub(crate) async fn find_group(service: &GroupService, group_id: i64) -> Result<Group> {
    match service.storage().get_group_by_id(group_id).await? {
        Some(group) => Ok(group),
        None => {
            warn!("Group {} not found", group_id);
            Err(RecordsError::not_found(format!("Group {group_id} not found")))
        }
    }
}

pub(crate) async fn load_detail(service: &GroupService, group: Group) -> Result<GroupDetail> {
    let storage = service.storage();

    let course = storage
        .get_course_by_id(group.course_id)
        .await?
        .ok_or_else(|| missing_reference(&group, "course", group.course_id))?;
    let teacher = storage
        .get_teacher_by_id(group.teacher_id)
        .await?
        .ok_or_else(|| missing_reference(&group, "teacher", group.teacher_id))?;
    let students = storage.list_students_by_group(group.id).await?;

    Ok(GroupDetail {
        group,
        course,
        teacher,
        students,
    })
}

fn missing_reference(group: &Group, kind: &str, id: i64) -> RecordsError {
    RecordsError::database_operation(format!(
        "Group {} references missing {kind} {id}",
        group.id
    ))
}
