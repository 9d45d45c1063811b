//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod groups;
mod students;
mod teachers;

use crate::config::DatabaseConfig;
use crate::errors::{RecordsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RecordsError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                RecordsError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| RecordsError::database_connection(format!("Cannot connect to database: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RecordsError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite:, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PersonRecord, RecordCounts,
    courses::{entities::Course, requests::CourseRequest},
    groups::{entities::Group, requests::GroupRequest},
    students::{entities::Student, responses::StudentWithGroup},
    teachers::entities::Teacher,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 课程模块
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn create_course(&self, course: CourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: CourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // 教师模块
    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(teacher_id).await
    }

    async fn create_teacher(&self, teacher: PersonRecord) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: PersonRecord,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(teacher_id, update).await
    }

    async fn delete_teacher(&self, teacher_id: i64) -> Result<bool> {
        self.delete_teacher_impl(teacher_id).await
    }

    // 学生模块
    async fn list_students_with_group(&self) -> Result<Vec<StudentWithGroup>> {
        self.list_students_with_group_impl().await
    }

    async fn list_students_by_group(&self, group_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_group_impl(group_id).await
    }

    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn create_student(&self, group_id: i64, student: PersonRecord) -> Result<Student> {
        self.create_student_impl(group_id, student).await
    }

    async fn update_student(
        &self,
        student_id: i64,
        update: PersonRecord,
    ) -> Result<Option<Student>> {
        self.update_student_impl(student_id, update).await
    }

    async fn delete_student(&self, student_id: i64) -> Result<bool> {
        self.delete_student_impl(student_id).await
    }

    // 小组模块
    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.list_groups_impl().await
    }

    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>> {
        self.get_group_by_id_impl(group_id).await
    }

    async fn find_group_by_name_in_course(
        &self,
        name: &str,
        course_id: i64,
        exclude_group_id: Option<i64>,
    ) -> Result<Option<Group>> {
        self.find_group_by_name_in_course_impl(name, course_id, exclude_group_id)
            .await
    }

    async fn find_group_by_teacher(
        &self,
        teacher_id: i64,
        exclude_group_id: Option<i64>,
    ) -> Result<Option<Group>> {
        self.find_group_by_teacher_impl(teacher_id, exclude_group_id)
            .await
    }

    async fn count_groups_by_course(&self, course_id: i64) -> Result<u64> {
        self.count_groups_by_course_impl(course_id).await
    }

    async fn count_groups_by_teacher(&self, teacher_id: i64) -> Result<u64> {
        self.count_groups_by_teacher_impl(teacher_id).await
    }

    async fn count_students_in_group(&self, group_id: i64) -> Result<u64> {
        self.count_students_in_group_impl(group_id).await
    }

    async fn create_group(&self, group: GroupRequest) -> Result<Group> {
        self.create_group_impl(group).await
    }

    async fn update_group(&self, group_id: i64, update: GroupRequest) -> Result<Option<Group>> {
        self.update_group_impl(group_id, update).await
    }

    async fn delete_group(&self, group_id: i64) -> Result<bool> {
        self.delete_group_impl(group_id).await
    }

    async fn clear_group_students(&self, group_id: i64) -> Result<u64> {
        self.clear_group_students_impl(group_id).await
    }

    async fn replace_group_students(
        &self,
        group_id: i64,
        students: Vec<PersonRecord>,
    ) -> Result<(u64, Vec<Student>)> {
        self.replace_group_students_impl(group_id, students).await
    }

    // 统计
    async fn count_records(&self) -> Result<RecordCounts> {
        use crate::entity::prelude::{Courses, Groups, Students, Teachers};
        use sea_orm::{EntityTrait, PaginatorTrait};

        let map_err = |e: sea_orm::DbErr| {
            RecordsError::database_operation(format!("Failed to count records: {e}"))
        };

        Ok(RecordCounts {
            courses: Courses::find().count(&self.db).await.map_err(map_err)?,
            teachers: Teachers::find().count(&self.db).await.map_err(map_err)?,
            groups: Groups::find().count(&self.db).await.map_err(map_err)?,
            students: Students::find().count(&self.db).await.map_err(map_err)?,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::config::DatabaseConfig;
    use crate::storage::Storage;

    /// 已完成迁移的内存 SQLite 存储
    pub(crate) async fn memory_storage() -> Arc<dyn Storage> {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        crate::storage::create_storage_with(&config)
            .await
            .expect("in-memory storage")
    }
}
