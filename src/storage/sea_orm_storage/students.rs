//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::groups::Entity as Groups;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{RecordsError, Result};
use crate::models::{
    PersonRecord,
    students::{entities::Student, responses::StudentWithGroup},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部学生及其所属小组
    pub async fn list_students_with_group_impl(&self) -> Result<Vec<StudentWithGroup>> {
        let rows = Students::find()
            .find_also_related(Groups)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to list students: {e}")))?;

        rows.into_iter()
            .map(|(student, group)| {
                let group = group.ok_or_else(|| {
                    RecordsError::database_operation(format!(
                        "Student {} references missing group {}",
                        student.id, student.group_id
                    ))
                })?;
                Ok(StudentWithGroup {
                    student: student.into_student(),
                    group: group.into_group(),
                })
            })
            .collect()
    }

    /// 列出小组内的学生
    pub async fn list_students_by_group_impl(&self, group_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::GroupId.eq(group_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                RecordsError::database_operation(format!("Failed to list group students: {e}"))
            })?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query student: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 创建学生
    pub async fn create_student_impl(&self, group_id: i64, record: PersonRecord) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            group_id: Set(group_id),
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to create student: {e}")))?;

        Ok(result.into_student())
    }

    /// 整体替换学生姓名，小组不变
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        record: PersonRecord,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(student_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(student_id),
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to update student: {e}")))?;

        Ok(Some(result.into_student()))
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let result = Students::delete_by_id(student_id)
            .exec(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to delete student: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
