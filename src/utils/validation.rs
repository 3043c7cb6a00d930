use crate::utils::error::{Result, SuiteError};
use std::path::Path;
use url::Url;

/// OpenAPI 文件可接受的副檔名
pub const SCHEMA_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> SuiteError {
    SuiteError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// base URL 之後會直接接上 `/search?...`，所以不能自帶 query 或 fragment
pub fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| invalid(field, value, format!("Invalid URL format: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            value,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, value, "URL has no host"));
    }
    if url.query().is_some() {
        return Err(invalid(field, value, "Base URL must not contain a query string"));
    }
    if url.fragment().is_some() {
        return Err(invalid(field, value, "Base URL must not contain a fragment"));
    }
    Ok(())
}

pub fn validate_schema_path(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Schema path cannot be empty"));
    }
    if value.contains('\0') {
        return Err(invalid(field, value, "Schema path contains null bytes"));
    }

    match Path::new(value).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if SCHEMA_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) => Ok(()),
        Some(ext) => Err(invalid(
            field,
            value,
            format!(
                "Unsupported schema extension: {}. Allowed extensions: {}",
                ext,
                SCHEMA_EXTENSIONS.join(", ")
            ),
        )),
        None => Err(invalid(field, value, "Schema path has no file extension")),
    }
}

/// 會被當成單一 argv 傳給工具的值，例如 `--checks all`
pub fn validate_cli_token(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(field, value, "Value cannot be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(field, value, "Value must not contain whitespace"));
    }
    Ok(())
}

pub fn validate_program(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Executable name cannot be empty"));
    }
    Ok(())
}

pub fn validate_at_least(field: &str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(invalid(
            field,
            &value.to_string(),
            format!("Value must be at least {}", min),
        ));
    }
    Ok(())
}
