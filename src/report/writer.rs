use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::{ReportError, ReportResult};
use crate::model::Student;

pub fn format_line(student: &Student) -> String {
    format!(
        "{} (ID: {}): Score = {}, Grade = {}",
        student.full_name,
        student.id,
        student.score,
        student.grade()
    )
}

pub fn write_report(path: &Path, students: &[Student]) -> ReportResult<()> {
    let io_err = |source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for student in students {
        writeln!(writer, "{}", format_line(student)).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;
    tracing::info!(count = students.len(), path = %path.display(), "report written");
    Ok(())
}
