use std::sync::LazyLock;

use regex::Regex;

use crate::modules::user::application::domain::entities::Zip;

// ASCII digits only; `\d` would also accept other Unicode digit classes.
static ZIP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[0-9]{{{},{}}}$",
        UserInputPolicy::MIN_ZIP_LEN,
        UserInputPolicy::MAX_ZIP_LEN
    ))
    .expect("zip pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserInputError {
    #[error("name is required")]
    MissingName,

    #[error("name must be a non-empty string")]
    EmptyName,

    #[error("zip is required")]
    MissingZip,

    #[error("zip must contain 4 to 10 digits")]
    InvalidZip,

    #[error("No fields to update")]
    NoFieldsToUpdate,
}

/// Shape rules for create/update payloads. Pure: no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserInputPolicy;

impl UserInputPolicy {
    pub const MIN_ZIP_LEN: usize = 4;
    pub const MAX_ZIP_LEN: usize = 10;

    pub fn check_name(name: &str) -> Result<(), UserInputError> {
        if name.is_empty() {
            return Err(UserInputError::EmptyName);
        }
        Ok(())
    }

    pub fn check_zip(zip: &str) -> Result<Zip, UserInputError> {
        if !ZIP_PATTERN.is_match(zip) {
            return Err(UserInputError::InvalidZip);
        }
        Ok(Zip::new_unchecked(zip.to_string()))
    }

    /// Create requires both fields.
    pub fn validate_create(
        name: Option<String>,
        zip: Option<String>,
    ) -> Result<(String, Zip), UserInputError> {
        let name = name.ok_or(UserInputError::MissingName)?;
        Self::check_name(&name)?;

        let zip = zip.ok_or(UserInputError::MissingZip)?;
        let zip = Self::check_zip(&zip)?;

        Ok((name, zip))
    }

    /// Update takes any subset of fields, but at least one.
    pub fn validate_update(
        name: Option<String>,
        zip: Option<String>,
    ) -> Result<(Option<String>, Option<Zip>), UserInputError> {
        if name.is_none() && zip.is_none() {
            return Err(UserInputError::NoFieldsToUpdate);
        }

        if let Some(name) = name.as_deref() {
            Self::check_name(name)?;
        }

        let zip = zip.as_deref().map(Self::check_zip).transpose()?;

        Ok((name, zip))
    }
}
