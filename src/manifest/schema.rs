//! The admissible top-level field set for each manifest document kind, keyed by the
//! `ManifestVersion` at which a field first became legal. Used by [`super::parser`] to raise
//! `FieldUnknown`/`FieldIsNotPascalCase` diagnostics without hand-writing a population function
//! per field (typed population itself goes through [`super::de`]).

use crate::{ManifestType, ManifestVersion};

/// One admissible field name, and the manifest version it requires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub since: ManifestVersion,
}

const fn field(name: &'static str, since: (u16, u16, u16)) -> Field {
    Field { name, since: ManifestVersion::new(since.0, since.1, since.2) }
}

const VERSION_FIELDS: &[Field] = &[
    field("PackageIdentifier", (1, 0, 0)),
    field("PackageVersion", (1, 0, 0)),
    field("DefaultLocale", (1, 0, 0)),
    field("ManifestType", (1, 0, 0)),
    field("ManifestVersion", (1, 0, 0)),
];

const LOCALE_SHARED_FIELDS: &[Field] = &[
    field("PackageIdentifier", (1, 0, 0)),
    field("PackageVersion", (1, 0, 0)),
    field("PackageLocale", (1, 0, 0)),
    field("Publisher", (1, 0, 0)),
    field("PublisherUrl", (1, 0, 0)),
    field("PublisherSupportUrl", (1, 0, 0)),
    field("PrivacyUrl", (1, 0, 0)),
    field("Author", (1, 0, 0)),
    field("PackageName", (1, 0, 0)),
    field("PackageUrl", (1, 0, 0)),
    field("License", (1, 0, 0)),
    field("LicenseUrl", (1, 0, 0)),
    field("Copyright", (1, 0, 0)),
    field("CopyrightUrl", (1, 0, 0)),
    field("ShortDescription", (1, 0, 0)),
    field("Description", (1, 0, 0)),
    field("Tags", (1, 0, 0)),
    field("Agreements", (1, 1, 0)),
    field("ReleaseNotes", (1, 4, 0)),
    field("ReleaseNotesUrl", (1, 4, 0)),
    field("PurchaseUrl", (1, 5, 0)),
    field("InstallationNotes", (1, 5, 0)),
    field("Documentations", (1, 6, 0)),
    field("Icons", (1, 9, 0)),
    field("ManifestType", (1, 0, 0)),
    field("ManifestVersion", (1, 0, 0)),
];

const INSTALLER_FIELDS: &[Field] = &[
    field("PackageIdentifier", (1, 0, 0)),
    field("PackageVersion", (1, 0, 0)),
    field("Channel", (1, 0, 0)),
    field("InstallerLocale", (1, 0, 0)),
    field("Platform", (1, 0, 0)),
    field("MinimumOSVersion", (1, 0, 0)),
    field("InstallerType", (1, 0, 0)),
    field("NestedInstallerType", (1, 4, 0)),
    field("NestedInstallerFiles", (1, 4, 0)),
    field("Scope", (1, 0, 0)),
    field("InstallModes", (1, 0, 0)),
    field("InstallerSwitches", (1, 0, 0)),
    field("InstallerSuccessCodes", (1, 0, 0)),
    field("ExpectedReturnCodes", (1, 1, 0)),
    field("UpgradeBehavior", (1, 0, 0)),
    field("Commands", (1, 0, 0)),
    field("Protocols", (1, 0, 0)),
    field("FileExtensions", (1, 0, 0)),
    field("Dependencies", (1, 0, 0)),
    field("PackageFamilyName", (1, 0, 0)),
    field("ProductCode", (1, 0, 0)),
    field("Capabilities", (1, 1, 0)),
    field("RestrictedCapabilities", (1, 1, 0)),
    field("Markets", (1, 0, 0)),
    field("InstallerAbortsTerminal", (1, 1, 0)),
    field("ReleaseDate", (1, 1, 0)),
    field("InstallLocationRequired", (1, 1, 0)),
    field("RequireExplicitUpgrade", (1, 1, 0)),
    field("DisplayInstallWarnings", (1, 2, 0)),
    field("UnsupportedOSArchitectures", (1, 2, 0)),
    field("UnsupportedArguments", (1, 5, 0)),
    field("AppsAndFeaturesEntries", (1, 1, 0)),
    field("ElevationRequirement", (1, 2, 0)),
    field("Installers", (1, 0, 0)),
    field("ManifestType", (1, 0, 0)),
    field("ManifestVersion", (1, 0, 0)),
    field("ReleaseNotes", (1, 4, 0)),
    field("ReleaseNotesUrl", (1, 4, 0)),
    field("InstallerReturnCodes", (1, 1, 0)),
    field("Authentication", (1, 7, 0)),
];

/// A singleton document carries every field an installer and a default locale would, folded into
/// one mapping; there is no separate `DefaultLocale` pointer since `PackageLocale` already names
/// the only locale the document describes.
const SINGLETON_FIELDS: &[Field] = &[
    field("PackageIdentifier", (1, 0, 0)),
    field("PackageVersion", (1, 0, 0)),
    field("PackageLocale", (1, 0, 0)),
    field("Publisher", (1, 0, 0)),
    field("PublisherUrl", (1, 0, 0)),
    field("PublisherSupportUrl", (1, 0, 0)),
    field("PrivacyUrl", (1, 0, 0)),
    field("Author", (1, 0, 0)),
    field("PackageName", (1, 0, 0)),
    field("PackageUrl", (1, 0, 0)),
    field("License", (1, 0, 0)),
    field("LicenseUrl", (1, 0, 0)),
    field("Copyright", (1, 0, 0)),
    field("CopyrightUrl", (1, 0, 0)),
    field("ShortDescription", (1, 0, 0)),
    field("Description", (1, 0, 0)),
    field("Tags", (1, 0, 0)),
    field("Agreements", (1, 1, 0)),
    field("ReleaseNotes", (1, 4, 0)),
    field("ReleaseNotesUrl", (1, 4, 0)),
    field("PurchaseUrl", (1, 5, 0)),
    field("InstallationNotes", (1, 5, 0)),
    field("Documentations", (1, 6, 0)),
    field("Icons", (1, 9, 0)),
    field("Channel", (1, 0, 0)),
    field("InstallerLocale", (1, 0, 0)),
    field("Platform", (1, 0, 0)),
    field("MinimumOSVersion", (1, 0, 0)),
    field("InstallerType", (1, 0, 0)),
    field("NestedInstallerType", (1, 4, 0)),
    field("NestedInstallerFiles", (1, 4, 0)),
    field("Scope", (1, 0, 0)),
    field("InstallModes", (1, 0, 0)),
    field("InstallerSwitches", (1, 0, 0)),
    field("InstallerSuccessCodes", (1, 0, 0)),
    field("ExpectedReturnCodes", (1, 1, 0)),
    field("UpgradeBehavior", (1, 0, 0)),
    field("Commands", (1, 0, 0)),
    field("Protocols", (1, 0, 0)),
    field("FileExtensions", (1, 0, 0)),
    field("Dependencies", (1, 0, 0)),
    field("PackageFamilyName", (1, 0, 0)),
    field("ProductCode", (1, 0, 0)),
    field("Capabilities", (1, 1, 0)),
    field("RestrictedCapabilities", (1, 1, 0)),
    field("Markets", (1, 0, 0)),
    field("InstallerAbortsTerminal", (1, 1, 0)),
    field("ReleaseDate", (1, 1, 0)),
    field("InstallLocationRequired", (1, 1, 0)),
    field("RequireExplicitUpgrade", (1, 1, 0)),
    field("DisplayInstallWarnings", (1, 2, 0)),
    field("UnsupportedOSArchitectures", (1, 2, 0)),
    field("UnsupportedArguments", (1, 5, 0)),
    field("AppsAndFeaturesEntries", (1, 1, 0)),
    field("ElevationRequirement", (1, 2, 0)),
    field("Installers", (1, 0, 0)),
    field("InstallerReturnCodes", (1, 1, 0)),
    field("Authentication", (1, 7, 0)),
    field("ManifestType", (1, 0, 0)),
    field("ManifestVersion", (1, 0, 0)),
];

/// Returns the admissible top-level field table for a document of the given kind.
#[must_use]
pub const fn fields_for(manifest_type: ManifestType) -> &'static [Field] {
    match manifest_type {
        ManifestType::Version => VERSION_FIELDS,
        ManifestType::DefaultLocale | ManifestType::Locale => LOCALE_SHARED_FIELDS,
        ManifestType::Installer => INSTALLER_FIELDS,
        ManifestType::Singleton => SINGLETON_FIELDS,
    }
}

/// The outcome of checking one written key against a field table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldLookup<'a> {
    /// The key matches a known field exactly.
    Known(&'a Field),
    /// The key case-insensitively matches a known field, but was not written in its canonical
    /// casing.
    WrongCase(&'a Field),
    /// The key does not match any known field at all.
    Unknown,
}

/// Looks up `key` within `fields`, reporting case mismatches distinctly from unknown fields so a
/// caller can raise `FieldIsNotPascalCase` or `FieldUnknown` as appropriate. Ignores a known
/// field's `since` version; the caller decides whether the current manifest version admits it.
#[must_use]
pub fn lookup<'a>(fields: &'a [Field], key: &str) -> FieldLookup<'a> {
    if let Some(field) = fields.iter().find(|field| field.name == key) {
        return FieldLookup::Known(field);
    }
    if let Some(field) = fields.iter().find(|field| field.name.eq_ignore_ascii_case(key)) {
        return FieldLookup::WrongCase(field);
    }
    FieldLookup::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_known() {
        let fields = fields_for(ManifestType::Version);
        assert!(matches!(lookup(fields, "PackageIdentifier"), FieldLookup::Known(_)));
    }

    #[test]
    fn wrong_case_is_reported_distinctly() {
        let fields = fields_for(ManifestType::Version);
        assert!(matches!(lookup(fields, "packageIdentifier"), FieldLookup::WrongCase(_)));
    }

    #[test]
    fn unrecognized_key_is_unknown() {
        let fields = fields_for(ManifestType::Version);
        assert!(matches!(lookup(fields, "NotAField"), FieldLookup::Unknown));
    }

    #[test]
    fn installer_fields_admit_dependencies() {
        let fields = fields_for(ManifestType::Installer);
        assert!(matches!(lookup(fields, "Dependencies"), FieldLookup::Known(_)));
    }
}
