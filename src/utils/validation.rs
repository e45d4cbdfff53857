use crate::config::CliConfig;
use crate::utils::error::{CodeGenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CodeGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CodeGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains a NUL byte".to_string(),
        });
    }

    Ok(())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        let err = validate_path("output_path", "").unwrap_err();
        assert!(matches!(
            err,
            CodeGenError::InvalidConfigValueError { .. }
        ));
    }

    #[test]
    fn regular_path_is_accepted() {
        assert!(validate_path("output_path", "data").is_ok());
    }

    #[test]
    fn config_with_default_output_validates() {
        let config = CliConfig {
            output_path: "data".to_string(),
            verbose: false,
        };
        assert!(config.validate().is_ok());
    }
}
