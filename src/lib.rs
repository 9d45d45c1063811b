//! University Records - 课程、小组、学生与教师档案核心库
//!
//! 提供课程、教师、学生和小组的增删改查，小组名单的 CSV 导入导出，
//! 以及 DOCX / PDF 名单文档生成。
//!
//! # 架构
//! - `config`: 配置管理
//! - `documents`: 名单文档渲染（DOCX / PDF）
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 日志与启动流程
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 输入校验

pub mod config;
pub mod documents;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
