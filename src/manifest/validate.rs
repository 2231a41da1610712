use thiserror::Error;

use super::dom::Mark;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Level {
    Warning,
    Error,
}

/// Identifies the shape of a validation finding, independent of the offending field's value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MessageId {
    FieldIsNotPascalCase,
    FieldDuplicate,
    FieldUnknown,
    DuplicateMappingKey,
    InconsistentMultiFileManifestFieldValue,
    DuplicateMultiFileManifestType,
    IncompleteMultiFileManifest,
    UnsupportedManifestVersion,
    DuplicateInstaller,
    RequireExplicitUpgradeConflict,
    MutuallyExclusiveMarkets,
    InvalidFieldValue,
    NoSuitableMinVersionDependency,
    FoundDependencyLoop,
}

/// One finding produced while validating a manifest, carrying enough context to report to a user
/// without re-walking the DOM.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationError {
    pub message_id: MessageId,
    pub context: String,
    pub value: String,
    pub mark: Mark,
    pub level: Level,
    pub file_name: Option<String>,
}

impl ValidationError {
    #[must_use]
    pub fn new(message_id: MessageId, context: impl Into<String>, level: Level) -> Self {
        Self {
            message_id,
            context: context.into(),
            value: String::new(),
            mark: Mark::default(),
            level,
            file_name: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub const fn with_mark(mut self, mark: Mark) -> Self {
        self.mark = mark;
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

/// Raised when a manifest fails validation. Carries every finding, not just the first.
#[derive(Debug, Error)]
#[error("manifest failed validation with {} issue(s)", .errors.len())]
pub struct ManifestException {
    pub errors: Vec<ValidationError>,
}

impl ManifestException {
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|error| error.level == Level::Error)
    }

    /// Returns `Err(self)` if any finding is `Level::Error` (or, when `throw_on_warning` is set,
    /// if there is any finding at all); otherwise returns `Ok(self.errors)` so warnings can still
    /// be surfaced to a caller that parsed successfully.
    pub fn into_result(self, throw_on_warning: bool) -> Result<Vec<ValidationError>, Self> {
        if self.has_errors() || (throw_on_warning && !self.errors.is_empty()) {
            Err(self)
        } else {
            Ok(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_level_fails_even_without_throw_on_warning() {
        let exception = ManifestException::new(vec![ValidationError::new(
            MessageId::FieldUnknown,
            "Foo",
            Level::Warning,
        )]);
        assert!(exception.into_result(false).is_ok());

        let exception = ManifestException::new(vec![ValidationError::new(
            MessageId::DuplicateMultiFileManifestType,
            "Installer",
            Level::Error,
        )]);
        assert!(exception.into_result(false).is_err());
    }

    #[test]
    fn throw_on_warning_fails_on_any_finding() {
        let exception = ManifestException::new(vec![ValidationError::new(
            MessageId::FieldIsNotPascalCase,
            "packageIdentifier",
            Level::Warning,
        )]);
        assert!(exception.into_result(true).is_err());
    }
}
