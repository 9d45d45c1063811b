//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 业务层统一返回 `Result<T>`，由调用方决定如何展示错误。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_records_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum RecordsError {
            $($variant(String),)*
        }

        impl RecordsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RecordsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RecordsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RecordsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RecordsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RecordsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_records_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Conflict("E007", "Conflict"),
    DocumentRender("E008", "Document Render Error"),
}

impl RecordsError {
    /// 引用的记录不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecordsError::NotFound(_))
    }

    /// 唯一性或依赖关系冲突
    pub fn is_conflict(&self) -> bool {
        matches!(self, RecordsError::Conflict(_))
    }

    /// 文件读写或解析失败
    pub fn is_io_failure(&self) -> bool {
        matches!(self, RecordsError::FileOperation(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RecordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RecordsError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for RecordsError {
    fn from(err: sea_orm::DbErr) -> Self {
        RecordsError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for RecordsError {
    fn from(err: std::io::Error) -> Self {
        RecordsError::FileOperation(err.to_string())
    }
}

impl From<csv::Error> for RecordsError {
    fn from(err: csv::Error) -> Self {
        RecordsError::FileOperation(err.to_string())
    }
}

impl From<zip::result::ZipError> for RecordsError {
    fn from(err: zip::result::ZipError) -> Self {
        RecordsError::DocumentRender(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RecordsError::database_config("test").code(), "E001");
        assert_eq!(RecordsError::file_operation("test").code(), "E004");
        assert_eq!(RecordsError::not_found("test").code(), "E006");
        assert_eq!(RecordsError::conflict("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            RecordsError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            RecordsError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = RecordsError::conflict("Teacher already assigned");
        assert_eq!(err.message(), "Teacher already assigned");
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_error_becomes_file_operation() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: RecordsError = io.into();
        assert!(err.is_io_failure());
        assert!(err.message().contains("missing.csv"));
    }

    #[test]
    fn test_format_simple() {
        let err = RecordsError::validation("Last name is required");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Last name is required"));
    }
}
