use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{CourseService, GroupService, StudentService, TeacherService};
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub courses: CourseService,
    pub teachers: TeacherService,
    pub students: StudentService,
    pub groups: GroupService,
}

/// 准备启动上下文：连接数据库、执行迁移并构建各业务服务
pub async fn prepare_startup() -> Result<StartupContext> {
    // 已有其他组件安装过时保持原样
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    // 提前校验分隔符，避免在导入导出时才发现配置错误
    config.transfer.delimiter_byte()?;

    Ok(StartupContext {
        courses: CourseService::new(storage.clone()),
        teachers: TeacherService::new(storage.clone()),
        students: StudentService::new(storage.clone()),
        groups: GroupService::new(storage.clone(), config.transfer.clone()),
        storage,
    })
}
