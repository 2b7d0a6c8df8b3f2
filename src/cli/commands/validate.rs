//! Validate command handler.
//!
//! Runs the loader and validator over each file and reports the
//! findings without rendering anything.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::{ConfigError, Severity, SitewrightError, ValidationIssue};
use crate::section::loader::load_sections;

/// Per-file validation outcome.
#[derive(Debug, Serialize)]
struct FileReport {
    /// File path as given on the command line.
    file: String,

    /// Whether the file loaded without errors.
    valid: bool,

    /// Section count, when the file parsed far enough to know.
    #[serde(skip_serializing_if = "Option::is_none")]
    sections: Option<usize>,

    /// Validation issues, when the validator ran.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<ValidationIssue>,

    /// Load failure outside the validator (missing file, bad JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Validate section config files.
///
/// Every file is checked even after one fails; the report covers all
/// of them. The command exits non-zero if any file was invalid.
///
/// # Errors
///
/// Returns the first file's config error when any file fails, after
/// the full report has been printed.
pub fn run(args: &ValidateArgs) -> Result<(), SitewrightError> {
    let mut reports = Vec::with_capacity(args.files.len());
    let mut first_failure: Option<ConfigError> = None;

    for path in &args.files {
        let (report, error) = validate_file(path, args.strict);
        if first_failure.is_none() {
            first_failure = error;
        }
        reports.push(report);
    }

    match args.format {
        OutputFormat::Human => print_human(&reports),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    first_failure.map_or(Ok(()), |err| Err(err.into()))
}

fn validate_file(path: &Path, strict: bool) -> (FileReport, Option<ConfigError>) {
    let file = path.display().to_string();
    info!(file = %file, "validating");

    match load_sections(path) {
        Ok(loaded) => {
            let mut issues = loaded.warnings;
            let sections = Some(loaded.sections.len());

            if strict && !issues.is_empty() {
                for issue in &mut issues {
                    issue.severity = Severity::Error;
                }
                let error = ConfigError::ValidationFailed {
                    path: file.clone(),
                    errors: issues.clone(),
                };
                let report = FileReport {
                    file,
                    valid: false,
                    sections,
                    issues,
                    error: None,
                };
                return (report, Some(error));
            }

            let report = FileReport {
                file,
                valid: true,
                sections,
                issues,
                error: None,
            };
            (report, None)
        }
        Err(err) => {
            let (issues, message) = match &err {
                ConfigError::ValidationFailed { errors, .. } => (errors.clone(), None),
                other => (Vec::new(), Some(other.to_string())),
            };
            let report = FileReport {
                file,
                valid: false,
                sections: None,
                issues,
                error: message,
            };
            (report, Some(err))
        }
    }
}

fn print_human(reports: &[FileReport]) {
    for report in reports {
        if report.valid {
            println!(
                "{}: ok ({} sections)",
                report.file,
                report.sections.unwrap_or(0)
            );
        } else {
            println!("{}: invalid", report.file);
        }
        if let Some(message) = &report.error {
            println!("  {message}");
        }
        for issue in &report.issues {
            println!("  {issue}");
        }
    }
}
