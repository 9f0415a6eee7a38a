//! Visitor name validation.
//!
//! The name is the only free text the garden accepts. It is trimmed,
//! capped at [`MAX_NAME_CHARS`] characters and stripped of angle brackets
//! before it is written anywhere.

use std::fmt;

use crate::error::{GardenError, GardenResult};

/// Longest name kept, in characters.
pub const MAX_NAME_CHARS: usize = 20;

/// A sanitized visitor name.
///
/// Can be empty when the raw input consisted only of stripped characters;
/// an empty name disables personalisation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate and sanitize raw name input.
///
/// Fails with [`GardenError::EmptyInput`] when nothing is left after
/// trimming. The emptiness check happens before bracket stripping.
pub fn validate(raw: &str) -> GardenResult<Name> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GardenError::EmptyInput);
    }

    let sanitized: String = trimmed
        .chars()
        .take(MAX_NAME_CHARS)
        .filter(|c| !matches!(c, '<' | '>'))
        .collect();

    Ok(Name(sanitized))
}
