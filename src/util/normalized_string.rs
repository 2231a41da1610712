use std::fmt;

use compact_str::CompactString;

/// A string trimmed of leading/trailing whitespace, used anywhere a value is compared or hashed
/// without regard to incidental formatting (e.g. a free-form submission field).
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NormalizedString(CompactString);

impl NormalizedString {
    #[must_use]
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self(CompactString::new(value.as_ref().trim()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for NormalizedString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NormalizedString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<CompactString> for NormalizedString {
    fn from(value: CompactString) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for NormalizedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A localization-aware string: either shared across every locale (`Independent`) or scoped to
/// the locale it was read from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LocIndString {
    Independent(NormalizedString),
    Localized(NormalizedString),
}

impl LocIndString {
    #[must_use]
    pub fn value(&self) -> &NormalizedString {
        match self {
            Self::Independent(value) | Self::Localized(value) => value,
        }
    }

    #[must_use]
    pub const fn is_independent(&self) -> bool {
        matches!(self, Self::Independent(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        assert_eq!(NormalizedString::new("  hello \n").as_str(), "hello");
    }

    #[test]
    fn loc_ind_string_unwraps_either_variant() {
        let independent = LocIndString::Independent(NormalizedString::new("x"));
        let localized = LocIndString::Localized(NormalizedString::new("x"));
        assert_eq!(independent.value(), localized.value());
        assert!(independent.is_independent());
        assert!(!localized.is_independent());
    }
}
