use std::fmt;

use icu_locale::LanguageIdentifier;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManifestType {
    #[default]
    Installer,
    DefaultLocale,
    Locale,
    Version,
    Singleton,
}

impl ManifestType {
    pub(crate) const fn installer() -> Self {
        Self::Installer
    }

    pub(crate) const fn singleton() -> Self {
        Self::Singleton
    }

    pub(crate) const fn default_locale() -> Self {
        Self::DefaultLocale
    }

    pub(crate) const fn locale() -> Self {
        Self::Locale
    }

    pub(crate) const fn version() -> Self {
        Self::Version
    }
}

impl fmt::Display for ManifestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installer => f.write_str("Installer"),
            Self::DefaultLocale => f.write_str("DefaultLocale"),
            Self::Locale => f.write_str("Locale"),
            Self::Version => f.write_str("Version"),
            Self::Singleton => f.write_str("Singleton"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ManifestTypeWithLocale {
    Installer,
    Locale(LanguageIdentifier),
    Version,
}
