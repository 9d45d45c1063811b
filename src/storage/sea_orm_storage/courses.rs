//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{RecordsError, Result};
use crate::models::courses::{entities::Course, requests::CourseRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to list courses: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query course: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 创建课程
    pub async fn create_course_impl(&self, req: CourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to create course: {e}")))?;

        Ok(result.into_course())
    }

    /// 整体替换课程信息
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: CourseRequest,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        if self.get_course_by_id_impl(course_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(course_id),
            name: Set(update.name),
            description: Set(update.description),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to update course: {e}")))?;

        Ok(Some(result.into_course()))
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to delete course: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
