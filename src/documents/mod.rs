//! 名单文档生成
//!
//! - `docx`: 流式文档（WordprocessingML）
//! - `pdf`: 固定版式文档（A4 分页）
//!
//! 渲染器只产出字节，写文件由服务层负责。

mod docx;
mod pdf;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{RecordsError, Result};

/// 文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// 流式文档
    Docx,
    /// 固定版式文档
    Pdf,
}

impl DocumentFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf => "pdf",
        }
    }

    /// 根据目标文件扩展名推断格式
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                RecordsError::validation(format!(
                    "Cannot infer document format from {}",
                    path.display()
                ))
            })?
            .parse()
    }
}

impl FromStr for DocumentFormat {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            other => Err(RecordsError::validation(format!(
                "Unsupported document format: {other}, supported: docx, pdf"
            ))),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 待渲染的小组名单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub course_name: String,
    pub group_name: String,
    /// 按顺序排列的学生全名
    pub students: Vec<String>,
}

impl Roster {
    pub fn course_title(&self) -> String {
        format!("Course: {}", self.course_name)
    }

    pub fn group_title(&self) -> String {
        format!("Group: {}", self.group_name)
    }

    /// 标题块：课程行和小组行
    pub fn title_lines(&self) -> [String; 2] {
        [self.course_title(), self.group_title()]
    }

    /// 从 1 开始编号的名单行
    pub fn numbered_lines(&self) -> Vec<String> {
        self.students
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {}", i + 1, name))
            .collect()
    }
}

/// 按格式渲染名单
pub fn render(format: DocumentFormat, roster: &Roster) -> Result<Vec<u8>> {
    match format {
        DocumentFormat::Docx => docx::render(roster),
        DocumentFormat::Pdf => pdf::render(roster),
    }
}
