use std::fs;
use std::path::Path;

use super::error::{ReportError, ReportResult};
use crate::model::Student;

/// Parses one `id,fullName,score` line. `line` is 1-based and only used for
/// error reporting.
pub fn parse_line(line: usize, text: &str) -> ReportResult<Student> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(ReportError::MissingField {
            line,
            found: fields.len(),
        });
    }

    let id = fields[0]
        .parse::<u32>()
        .map_err(|_| ReportError::InvalidIdFormat {
            line,
            value: fields[0].to_string(),
        })?;
    let score = fields[2]
        .parse::<i32>()
        .map_err(|_| ReportError::InvalidScoreFormat {
            line,
            value: fields[2].to_string(),
        })?;

    Ok(Student::new(id, fields[1], score))
}

/// Reads a whole score file. Blank lines are skipped; the first malformed line
/// aborts the batch.
pub fn read_students(path: &Path) -> ReportResult<Vec<Student>> {
    let content = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut students = Vec::new();
    for (i, text) in content.lines().enumerate() {
        if text.trim().is_empty() {
            continue;
        }
        students.push(parse_line(i + 1, text)?);
    }
    tracing::debug!(count = students.len(), path = %path.display(), "students read");
    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_line() {
        let student = parse_line(1, "101, Kofi Mensah , 84").unwrap();
        assert_eq!(student, Student::new(101, "Kofi Mensah", 84));
    }

    #[test]
    fn test_missing_field() {
        let err = parse_line(4, "101,Kofi Mensah").unwrap_err();
        assert!(matches!(err, ReportError::MissingField { line: 4, found: 2 }));
    }

    #[test]
    fn test_invalid_score() {
        let err = parse_line(2, "101,Kofi Mensah,eighty").unwrap_err();
        match err {
            ReportError::InvalidScoreFormat { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_id() {
        let err = parse_line(1, "abc,Kofi Mensah,80").unwrap_err();
        assert!(matches!(err, ReportError::InvalidIdFormat { line: 1, .. }));
    }

    #[test]
    fn test_read_students_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.txt");
        fs::write(&path, "1,Ama Owusu,91\n\n2,Yaw Boateng,48\n").unwrap();

        let students = read_students(&path).unwrap();
        assert_eq!(
            students,
            vec![
                Student::new(1, "Ama Owusu", 91),
                Student::new(2, "Yaw Boateng", 48),
            ]
        );
    }

    #[test]
    fn test_bad_line_aborts_batch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.txt");
        fs::write(&path, "1,Ama Owusu,91\n2,Yaw Boateng\n3,Esi Asante,66\n").unwrap();

        let err = read_students(&path).unwrap_err();
        assert!(matches!(err, ReportError::MissingField { line: 2, .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_students(&temp_dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
