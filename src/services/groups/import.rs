use std::path::Path;

use tracing::{info, warn};

use super::GroupService;
use super::list::find_group;
use crate::errors::{RecordsError, Result};
use crate::models::PersonRecord;
use crate::models::groups::responses::StudentImportSummary;
use crate::utils::validate::person_errors;

const FIRST_NAME_COLUMN: &str = "firstname";
const LAST_NAME_COLUMN: &str = "lastname";

pub async fn import_students(
    service: &GroupService,
    group_id: i64,
    source: &Path,
) -> Result<StudentImportSummary> {
    find_group(service, group_id).await?;

    let transfer = service.transfer();
    let delimiter = transfer.delimiter_byte()?;

    let bytes = tokio::fs::read(source).await.map_err(|e| {
        warn!("Cannot read import file {}: {}", source.display(), e);
        RecordsError::file_operation(format!("Failed to read {}: {e}", source.display()))
    })?;

    let students = match parse_roster_csv(&bytes, delimiter, transfer.max_import_rows) {
        Ok(students) => students,
        Err(e) => {
            warn!("Rejected import file {}: {}", source.display(), e.message());
            return Err(e);
        }
    };

    let (removed, inserted) = service
        .storage()
        .replace_group_students(group_id, students)
        .await?;

    info!(
        "Imported {} student(s) into group {} from {} ({} removed)",
        inserted.len(),
        group_id,
        source.display(),
        removed
    );

    Ok(StudentImportSummary {
        group_id,
        removed,
        imported: inserted.len(),
    })
}

/// 解析名单 CSV
///
/// 需要表头，列名不区分大小写并忽略 `_`、`-` 和空格；其他列忽略。
/// 所有行先全部校验，任何一行不合法则整体拒绝。
pub fn parse_roster_csv(bytes: &[u8], delimiter: u8, max_rows: usize) -> Result<Vec<PersonRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| normalize_header(h) == name)
            .ok_or_else(|| {
                RecordsError::validation(format!(
                    "Missing required column {name:?} in header {:?}",
                    headers.iter().collect::<Vec<_>>()
                ))
            })
    };
    let first_idx = column(FIRST_NAME_COLUMN)?;
    let last_idx = column(LAST_NAME_COLUMN)?;

    let mut students = Vec::new();
    let mut errors = Vec::new();

    for row in reader.records() {
        let row = row?;
        if students.len() + errors.len() >= max_rows {
            return Err(RecordsError::validation(format!(
                "Import file has more than {max_rows} rows"
            )));
        }

        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record = PersonRecord {
            first_name: row.get(first_idx).map(str::to_string),
            last_name: row.get(last_idx).unwrap_or_default().to_string(),
        }
        .normalized();

        let problems = person_errors(&record);
        if problems.is_empty() {
            students.push(record);
        } else {
            errors.push(format!("line {line}: {}", problems.join(", ")));
        }
    }

    if !errors.is_empty() {
        return Err(RecordsError::validation(format!(
            "Invalid student rows: {}",
            errors.join("; ")
        )));
    }
    if students.is_empty() {
        return Err(RecordsError::validation("Import file contains no student rows"));
    }

    Ok(students)
}

fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
