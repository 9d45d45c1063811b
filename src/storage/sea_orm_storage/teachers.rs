//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{RecordsError, Result};
use crate::models::{PersonRecord, teachers::entities::Teacher};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let teachers = Teachers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to list teachers: {e}")))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query teacher: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 创建教师
    pub async fn create_teacher_impl(&self, record: PersonRecord) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to create teacher: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 整体替换教师信息
    pub async fn update_teacher_impl(
        &self,
        teacher_id: i64,
        record: PersonRecord,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_by_id_impl(teacher_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(teacher_id),
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to update teacher: {e}")))?;

        Ok(Some(result.into_teacher()))
    }

    /// 删除教师
    pub async fn delete_teacher_impl(&self, teacher_id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(teacher_id)
            .exec(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to delete teacher: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
