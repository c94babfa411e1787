//! Export of the validated time logs to JSON or CSV.

mod csv;
mod fs_utils;
mod json;

use crate::errors::AppResult;
use crate::models::TimeLogRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub use fs_utils::ensure_writable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `path`. An existing file is only replaced with
    /// `force` or an interactive yes.
    pub fn export(
        records: &[TimeLogRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Json => json::write_json(path, records)?,
            ExportFormat::Csv => csv::write_csv(path, records)?,
        }

        success(format!(
            "{} export completed: {} ({} records)",
            format.as_str().to_uppercase(),
            path.display(),
            records.len()
        ));
        Ok(())
    }
}
