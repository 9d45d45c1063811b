//! 小组存储操作

use super::SeaOrmStorage;
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::entity::students::{
    ActiveModel as StudentActiveModel, Column as StudentColumn, Entity as Students,
};
use crate::errors::{RecordsError, Result};
use crate::models::{
    PersonRecord,
    groups::{entities::Group, requests::GroupRequest},
    students::entities::Student,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, warn};

impl SeaOrmStorage {
    /// 列出全部小组
    pub async fn list_groups_impl(&self) -> Result<Vec<Group>> {
        let groups = Groups::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to list groups: {e}")))?;

        Ok(groups.into_iter().map(|m| m.into_group()).collect())
    }

    /// 通过 ID 获取小组
    pub async fn get_group_by_id_impl(&self, group_id: i64) -> Result<Option<Group>> {
        let result = Groups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query group: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 查找同一课程内的同名小组
    pub async fn find_group_by_name_in_course_impl(
        &self,
        name: &str,
        course_id: i64,
        exclude_group_id: Option<i64>,
    ) -> Result<Option<Group>> {
        let mut select = Groups::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Name.eq(name));

        if let Some(exclude) = exclude_group_id {
            select = select.filter(Column::Id.ne(exclude));
        }

        let result = select
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query group: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 查找教师负责的小组
    pub async fn find_group_by_teacher_impl(
        &self,
        teacher_id: i64,
        exclude_group_id: Option<i64>,
    ) -> Result<Option<Group>> {
        let mut select = Groups::find().filter(Column::TeacherId.eq(teacher_id));

        if let Some(exclude) = exclude_group_id {
            select = select.filter(Column::Id.ne(exclude));
        }

        let result = select
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query group: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    pub async fn count_groups_by_course_impl(&self, course_id: i64) -> Result<u64> {
        Groups::find()
            .filter(Column::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to count groups: {e}")))
    }

    pub async fn count_groups_by_teacher_impl(&self, teacher_id: i64) -> Result<u64> {
        Groups::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .count(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to count groups: {e}")))
    }

    pub async fn count_students_in_group_impl(&self, group_id: i64) -> Result<u64> {
        Students::find()
            .filter(StudentColumn::GroupId.eq(group_id))
            .count(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to count students: {e}")))
    }

    /// 创建小组
    pub async fn create_group_impl(&self, req: GroupRequest) -> Result<Group> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            course_id: Set(req.course_id),
            teacher_id: Set(req.teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to create group: {e}")))?;

        Ok(result.into_group())
    }

    /// 整体替换小组信息
    pub async fn update_group_impl(
        &self,
        group_id: i64,
        update: GroupRequest,
    ) -> Result<Option<Group>> {
        if self.get_group_by_id_impl(group_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(group_id),
            name: Set(update.name),
            course_id: Set(update.course_id),
            teacher_id: Set(update.teacher_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to update group: {e}")))?;

        Ok(Some(result.into_group()))
    }

    /// 删除小组
    pub async fn delete_group_impl(&self, group_id: i64) -> Result<bool> {
        let result = Groups::delete_by_id(group_id)
            .exec(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to delete group: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 移除小组内全部学生
    pub async fn clear_group_students_impl(&self, group_id: i64) -> Result<u64> {
        delete_group_students(&self.db, group_id).await
    }

    /// 在同一事务中清空并重建小组名单，任何一步失败都会回滚
    pub async fn replace_group_students_impl(
        &self,
        group_id: i64,
        students: Vec<PersonRecord>,
    ) -> Result<(u64, Vec<Student>)> {
        let txn = self.db.begin().await.map_err(|e| {
            RecordsError::database_operation(format!("Failed to begin transaction: {e}"))
        })?;

        let result = async {
            let removed = delete_group_students(&txn, group_id).await?;
            let now = chrono::Utc::now().timestamp();
            let mut inserted = Vec::with_capacity(students.len());

            for record in students {
                let model = StudentActiveModel {
                    group_id: Set(group_id),
                    first_name: Set(record.first_name),
                    last_name: Set(record.last_name),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                let saved = model.insert(&txn).await.map_err(|e| {
                    RecordsError::database_operation(format!("Failed to insert student: {e}"))
                })?;
                inserted.push(saved.into_student());
            }

            Ok::<_, RecordsError>((removed, inserted))
        }
        .await;

        match result {
            Ok(outcome) => {
                txn.commit().await.map_err(|e| {
                    RecordsError::database_operation(format!("Failed to commit transaction: {e}"))
                })?;
                debug!(
                    "Replaced roster of group {}: {} removed, {} inserted",
                    group_id,
                    outcome.0,
                    outcome.1.len()
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!("Rolling back roster replacement for group {}: {}", group_id, e);
                if let Err(rollback_err) = txn.rollback().await {
                    warn!("Rollback failed for group {}: {}", group_id, rollback_err);
                }
                Err(e)
            }
        }
    }
}

async fn delete_group_students<C: ConnectionTrait>(db: &C, group_id: i64) -> Result<u64> {
    let result = Students::delete_many()
        .filter(StudentColumn::GroupId.eq(group_id))
        .exec(db)
        .await
        .map_err(|e| RecordsError::database_operation(format!("Failed to remove students: {e}")))?;

    Ok(result.rows_affected)
}
