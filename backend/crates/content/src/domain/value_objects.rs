//! Locale Value Object

use derive_more::Display;

use crate::error::ContentError;

pub const LOCALE_MIN_LENGTH: usize = 2;
pub const LOCALE_MAX_LENGTH: usize = 16;

/// Content locale, e.g. `en`, `pt-br`
///
/// Also the name of a directory under the content root, so only ASCII
/// alphanumerics, `-` and `_` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Locale(String);

impl Locale {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let valid_len = (LOCALE_MIN_LENGTH..=LOCALE_MAX_LENGTH).contains(&raw.len());
        let valid_chars = raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid_len && valid_chars {
            Ok(Self(raw.to_string()))
        } else {
            Err(ContentError::InvalidLocale(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
