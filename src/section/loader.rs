//! Section config loader.
//!
//! This module implements the loading pipeline:
//! 1. File size check
//! 2. Raw read (UTF-8 BOM tolerated)
//! 3. JSON parsing to an untyped value
//! 4. Kind tag pre-check (unknown kinds get a did-you-mean suggestion)
//! 5. Deserialization to typed section configs
//! 6. Semantic validation
//!
//! A config file holds either a single section object or an array of
//! them; both load into the same `Vec<SectionConfig>`.

use std::path::Path;

use serde_json::Value;

use crate::error::{ConfigError, ValidationIssue};
use crate::section::kind::SectionKind;
use crate::section::schema::SectionConfig;
use crate::section::validation::Validator;

// ============================================================================
// Public API
// ============================================================================

/// Maximum accepted config file size in bytes.
pub const MAX_CONFIG_SIZE: usize = 1024 * 1024;

/// Result of loading a section config file.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated sections, in page order.
    pub sections: Vec<SectionConfig>,

    /// Validation warnings. The sections load anyway.
    pub warnings: Vec<ValidationIssue>,
}

/// Loads section configs from a JSON file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read or exceeds [`MAX_CONFIG_SIZE`]
/// - JSON parsing fails
/// - A `kind` tag names no known section kind
/// - Validation reports errors
pub fn load_sections(path: &Path) -> Result<LoadResult, ConfigError> {
    let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;

    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if size > MAX_CONFIG_SIZE {
        return Err(ConfigError::TooLarge {
            size,
            limit: MAX_CONFIG_SIZE,
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: None,
        column: None,
        message: e.to_string(),
    })?;

    parse_sections(&raw, path)
}

/// Parses section configs from raw JSON text.
///
/// `origin` is only used in error values, so callers parsing in-memory
/// text can pass any label.
///
/// # Errors
///
/// Same conditions as [`load_sections`], minus the filesystem ones.
pub fn parse_sections(raw: &str, origin: &Path) -> Result<LoadResult, ConfigError> {
    // Handle UTF-8 BOM
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let root: Value = serde_json::from_str(raw).map_err(|e| ConfigError::ParseError {
        path: origin.to_path_buf(),
        line: (e.line() > 0).then(|| e.line()),
        column: (e.column() > 0).then(|| e.column()),
        message: e.to_string(),
    })?;

    let items = normalize(root, origin)?;

    let mut sections = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        precheck_kind(&item, index, origin)?;

        let section: SectionConfig =
            serde_json::from_value(item).map_err(|e| ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: None,
                column: None,
                message: format!("sections[{index}]: {e}"),
            })?;
        sections.push(section);
    }

    let result = Validator::new().validate(&sections);
    if result.has_errors() {
        return Err(ConfigError::ValidationFailed {
            path: origin.display().to_string(),
            errors: result.errors,
        });
    }

    Ok(LoadResult {
        sections,
        warnings: result.warnings,
    })
}

// ============================================================================
// Pipeline Stages
// ============================================================================

/// Accepts a single section object or an array of them.
fn normalize(root: Value, origin: &Path) -> Result<Vec<Value>, ConfigError> {
    match root {
        Value::Array(items) => Ok(items),
        object @ Value::Object(_) => Ok(vec![object]),
        Value::Null => Err(ConfigError::ParseError {
            path: origin.to_path_buf(),
            line: None,
            column: None,
            message: "config file is empty".to_string(),
        }),
        other => Err(ConfigError::ParseError {
            path: origin.to_path_buf(),
            line: None,
            column: None,
            message: format!(
                "expected a section object or an array of section objects, got {}",
                json_type_name(&other)
            ),
        }),
    }
}

/// Checks the `kind` tag before the typed parse so an unknown kind
/// produces a targeted error instead of a serde enum message.
fn precheck_kind(item: &Value, index: usize, origin: &Path) -> Result<(), ConfigError> {
    let Some(kind) = item.get("kind") else {
        return Err(ConfigError::ParseError {
            path: origin.to_path_buf(),
            line: None,
            column: None,
            message: format!("sections[{index}] is missing the \"kind\" tag"),
        });
    };

    let Some(kind) = kind.as_str() else {
        return Err(ConfigError::ParseError {
            path: origin.to_path_buf(),
            line: None,
            column: None,
            message: format!("sections[{index}].kind must be a string"),
        });
    };

    if SectionKind::from_tag(kind).is_none() {
        return Err(ConfigError::UnknownKind {
            kind: kind.to_string(),
            suggestion: SectionKind::suggest(kind).map(|k| k.as_str().to_string()),
        });
    }

    Ok(())
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Tests
// ============================================================================
