use serde::{Deserialize, Serialize};

/// 人员记录（教师、学生共用）
///
/// 名可以为空，姓必填。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub first_name: Option<String>,
    pub last_name: String,
}

impl PersonRecord {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: last_name.into(),
        }
        .normalized()
    }

    /// 去除首尾空白，空的名视为未填写
    pub fn normalized(self) -> Self {
        Self {
            first_name: self
                .first_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            last_name: self.last_name.trim().to_string(),
        }
    }

    /// 名单中显示的全名
    pub fn full_name(&self) -> String {
        full_name(self.first_name.as_deref(), &self.last_name)
    }
}

pub(crate) fn full_name(first_name: Option<&str>, last_name: &str) -> String {
    match first_name {
        Some(first) if !first.is_empty() => format!("{first} {last_name}"),
        _ => last_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_and_drops_empty_first_name() {
        let record = PersonRecord {
            first_name: Some("   ".to_string()),
            last_name: "  Builder ".to_string(),
        }
        .normalized();
        assert_eq!(record.first_name, None);
        assert_eq!(record.last_name, "Builder");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(PersonRecord::new("Alice", "Wonderland").full_name(), "Alice Wonderland");
        assert_eq!(PersonRecord::new("", "Builder").full_name(), "Builder");
    }
}
