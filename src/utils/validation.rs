use crate::utils::error::{TurtleError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TurtleError::validation(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(TurtleError::validation(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive(field_name: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(TurtleError::validation(
            field_name,
            value,
            format!("`{}` should be positive.", field_name),
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(TurtleError::validation(
            field_name,
            value,
            format!("`{}` cannot be negative.", field_name),
        ));
    }
    Ok(())
}

/// Fails unless `len >= min_len`; `what` is the plural noun used in the message.
pub fn validate_min_len(field_name: &str, len: usize, min_len: usize, what: &str) -> Result<()> {
    if len < min_len {
        return Err(TurtleError::validation(
            field_name,
            len,
            format!("`{}` must contain a minimum of {} {}.", field_name, min_len, what),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TurtleError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Row offsets end up compared against a `UInt32` index.
pub fn validate_index_offset(field_name: &str, value: i64) -> Result<u32> {
    validate_non_negative(field_name, value)?;
    u32::try_from(value).map_err(|_| {
        TurtleError::validation(field_name, value, format!("Value must be at most {}", u32::MAX))
    })
}
