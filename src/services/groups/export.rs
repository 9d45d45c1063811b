use std::path::Path;

use tracing::info;

use super::GroupService;
use super::list::find_group;
use crate::errors::{RecordsError, Result};
use crate::models::students::entities::Student;

pub const EXPORT_HEADER: [&str; 4] = ["StudentId", "FirstName", "LastName", "GroupName"];

pub async fn export_students(
    service: &GroupService,
    group_id: i64,
    destination: &Path,
) -> Result<usize> {
    let group = find_group(service, group_id).await?;
    let students = service.storage().list_students_by_group(group_id).await?;
    let delimiter = service.transfer().delimiter_byte()?;

    let bytes = render_students_csv(&group.name, &students, delimiter)?;
    tokio::fs::write(destination, bytes).await.map_err(|e| {
        RecordsError::file_operation(format!(
            "Failed to write {}: {e}",
            destination.display()
        ))
    })?;

    info!(
        "Exported {} student(s) of group {} to {}",
        students.len(),
        group_id,
        destination.display()
    );
    Ok(students.len())
}

/// 每个学生一行：ID、名、姓、小组名
pub fn render_students_csv(group_name: &str, students: &[Student], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;
    for student in students {
        writer.write_record([
            student.id.to_string().as_str(),
            student.first_name.as_deref().unwrap_or_default(),
            student.last_name.as_str(),
            group_name,
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| RecordsError::file_operation(format!("Failed to flush CSV: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonRecord;
    use crate::models::groups::requests::GroupRequest;
    use crate::services::groups::fixtures::fixture;

    fn student(id: i64, first: Option<&str>, last: &str) -> Student {
        Student {
            id,
            group_id: 1,
            first_name: first.map(str::to_string),
            last_name: last.to_string(),
            created_at: chrono::DateTime::default(),
            updated_at: chrono::DateTime::default(),
        }
    }

    #[test]
    fn test_render_students_csv() {
        let students = vec![
            student(3, Some("Alice"), "Smith"),
            student(7, None, "Builder, Jr"),
        ];
        let csv = String::from_utf8(render_students_csv("Chem 101", &students, b',').unwrap()).unwrap();
        assert_eq!(
            csv,
            "StudentId,FirstName,LastName,GroupName\n\
             3,Alice,Smith,Chem 101\n\
             7,,\"Builder, Jr\",Chem 101\n"
        );
    }

    #[test]
    fn test_render_with_semicolon() {
        let students = vec![student(1, Some("Alice"), "Smith")];
        let csv = String::from_utf8(render_students_csv("A", &students, b';').unwrap()).unwrap();
        assert!(csv.starts_with("StudentId;FirstName;LastName;GroupName\n"));
        assert!(csv.contains("1;Alice;Smith;A"));
    }

    #[tokio::test]
    async fn test_export_to_file() {
        let fx = fixture().await;
        let group = fx
            .service
            .create(GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id))
            .await
            .unwrap();
        let alice = fx
            .storage
            .create_student(group.id, PersonRecord::new("Alice", "Smith"))
            .await
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        assert_eq!(fx.service.export_students(group.id, &path).await.unwrap(), 1);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            format!("StudentId,FirstName,LastName,GroupName\n{},Alice,Smith,Chem 101\n", alice.id)
        );
    }

    #[tokio::test]
    async fn test_export_missing_group() {
        let fx = fixture().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");

        let err = fx.service.export_students(404, &path).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_export_to_missing_directory() {
        let fx = fixture().await;
        let group = fx
            .service
            .create(GroupRequest::new("Chem 101", fx.course.id, fx.teacher.id))
            .await
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("roster.csv");

        let err = fx.service.export_students(group.id, &path).await.unwrap_err();
        assert!(err.is_io_failure());
    }
}
