use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{RecordsError, Result};
use crate::models::PersonRecord;
use crate::models::courses::requests::CourseRequest;

// 字段长度上限与数据库列定义保持一致
pub const COURSE_NAME_MAX: usize = 100;
pub const COURSE_DESCRIPTION_MAX: usize = 255;
pub const GROUP_NAME_MAX: usize = 50;
pub const PERSON_NAME_MAX: usize = 50;

static CONTROL_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x1F\x7F]").expect("Invalid control character regex"));

fn validate_text(field: &str, value: &str, max: usize) -> std::result::Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{field} must be at most {max} characters"));
    }
    if CONTROL_CHARS_RE.is_match(value) {
        return Err(format!("{field} must not contain control characters"));
    }
    Ok(())
}

fn validate_required(field: &str, value: &str, max: usize) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    validate_text(field, value, max)
}

/// 校验人员记录，返回全部错误信息
pub fn person_errors(record: &PersonRecord) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(first_name) = &record.first_name
        && let Err(msg) = validate_text("First name", first_name, PERSON_NAME_MAX)
    {
        errors.push(msg);
    }
    if let Err(msg) = validate_required("Last name", &record.last_name, PERSON_NAME_MAX) {
        errors.push(msg);
    }
    errors
}

pub fn validate_person(record: &PersonRecord) -> Result<()> {
    let errors = person_errors(record);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(RecordsError::validation(errors.join("; ")))
    }
}

pub fn validate_course(course: &CourseRequest) -> Result<()> {
    validate_required("Course name", &course.name, COURSE_NAME_MAX)
        .map_err(RecordsError::validation)?;
    if let Some(description) = &course.description {
        validate_text("Course description", description, COURSE_DESCRIPTION_MAX)
            .map_err(RecordsError::validation)?;
    }
    Ok(())
}

pub fn validate_group_name(name: &str) -> Result<()> {
    validate_required("Group name", name, GROUP_NAME_MAX).map_err(RecordsError::validation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_person() {
        assert!(validate_person(&PersonRecord::new("Alice", "Wonderland")).is_ok());
        assert!(validate_person(&PersonRecord::new("", "Builder")).is_ok());
    }

    #[test]
    fn test_missing_last_name() {
        let errors = person_errors(&PersonRecord::new("Alice", "  "));
        assert_eq!(errors, vec!["Last name is required".to_string()]);
    }

    #[test]
    fn test_long_first_name() {
        let record = PersonRecord::new("A".repeat(PERSON_NAME_MAX + 1), "Smith");
        let err = validate_person(&record).unwrap_err();
        assert!(err.message().contains("First name must be at most 50 characters"));
    }

    #[test]
    fn test_control_characters() {
        let record = PersonRecord::new("Al\u{7}ice", "Smith");
        assert!(validate_person(&record).is_err());
    }

    #[test]
    fn test_course_validation() {
        assert!(validate_course(&CourseRequest::new("Biochemistry", None)).is_ok());
        assert!(validate_course(&CourseRequest::new("", Some("desc"))).is_err());
        let long_description = "d".repeat(COURSE_DESCRIPTION_MAX + 1);
        assert!(
            validate_course(&CourseRequest::new("Biochemistry", Some(&long_description))).is_err()
        );
    }

    #[test]
    fn test_group_name_validation() {
        assert!(validate_group_name("Chem 101").is_ok());
        assert!(validate_group_name(" ").is_err());
        assert!(validate_group_name(&"g".repeat(GROUP_NAME_MAX + 1)).is_err());
    }
}
