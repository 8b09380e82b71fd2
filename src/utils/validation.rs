use crate::utils::error::{Result, SamplerError};
use std::path::{Component, Path};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects empty paths and paths the filesystem could never open.
pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A journal file name must name a file directly under the output directory.
pub fn validate_file_name(field_name: &str, file_name: &str) -> Result<()> {
    validate_path(field_name, file_name)?;

    if file_name.ends_with('/') || file_name.ends_with('\\') {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: "File name cannot be a directory".to_string(),
        });
    }

    let mut components = Path::new(file_name).components();
    let single_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_name || file_name.contains('\\') {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: "File name must not contain directories or be absolute".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
