//! The manifest model: a YAML DOM ([`dom`]), encoding detection ([`encoding`]), a `serde` bridge
//! from DOM nodes to the typed manifest structs ([`de`]), a field-driven multi-document parser
//! ([`parser`]), validation diagnostics ([`validate`]), the version-parameterized admissible-field
//! table ([`schema`]), and a canonical emitter ([`emit`]).

pub mod de;
pub mod dom;
pub mod emit;
pub mod encoding;
pub mod parser;
pub mod schema;
pub mod validate;

use crate::{
    installer::InstallerManifest,
    locale::{DefaultLocaleManifest, LocaleManifest, ResolvedLocalization},
    version::VersionManifest,
    ManifestType, ManifestVersion, PackageIdentifier, PackageVersion,
};

pub use parser::{parse, ManifestFile};
pub use validate::{Level, ManifestException, MessageId, ValidationError};

/// The logical, single-manifest view produced by folding a Version, Installer, DefaultLocale, and
/// zero or more Locale documents together.
///
/// This is a distinct type from [`crate::Manifest`], the per-document trait each physical YAML
/// file implements; `PackageManifest` is the merged aggregate `§3` of the manifest model calls
/// simply "Manifest: the primary entity".
#[derive(Clone, Debug, PartialEq)]
pub struct PackageManifest {
    pub package_identifier: PackageIdentifier,
    pub package_version: PackageVersion,
    pub manifest_version: ManifestVersion,
    pub manifest_type: ManifestType,
    pub installer: InstallerManifest,
    pub default_localization: DefaultLocaleManifest,
    pub localizations: Vec<ResolvedLocalization>,
}

impl PackageManifest {
    /// Folds a complete set of constituent documents into one merged view: starts from the
    /// installer document, layers the default locale's metadata over it, and resolves every
    /// additional locale against that default.
    #[must_use]
    pub fn merge(
        version: VersionManifest,
        installer: InstallerManifest,
        default_locale: DefaultLocaleManifest,
        locales: &[LocaleManifest],
    ) -> Self {
        Self {
            package_identifier: version.package_identifier,
            package_version: version.package_version,
            manifest_version: version.manifest_version,
            manifest_type: ManifestType::Installer,
            localizations: locales.iter().map(|locale| locale.resolve(&default_locale)).collect(),
            installer,
            default_localization: default_locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parser::ManifestFile;

    #[test]
    fn merge_sets_manifest_type_to_installer() {
        let files = [
            (
                "a.yaml",
                "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nDefaultLocale: en-US\nManifestType: version\nManifestVersion: 1.6.0\n",
            ),
            (
                "a.installer.yaml",
                "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nInstallerLocale: en-US\nManifestType: installer\nManifestVersion: 1.6.0\nInstallers:\n  - Architecture: x64\n    InstallerUrl: https://example.com/a.exe\n    InstallerSha256: 0000000000000000000000000000000000000000000000000000000000000001\n",
            ),
            (
                "a.locale.en-US.yaml",
                "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nPackageLocale: en-US\nPublisher: A\nPackageName: B\nLicense: MIT\nShortDescription: desc\nManifestType: defaultLocale\nManifestVersion: 1.6.0\n",
            ),
        ];
        let manifest_files: Vec<_> = files
            .iter()
            .map(|(name, text)| ManifestFile { file_name: name, bytes: text.as_bytes() })
            .collect();

        let (manifest, _warnings) = parse(&manifest_files, false).unwrap();
        assert_eq!(manifest.manifest_type, ManifestType::Installer);
        assert!(manifest.localizations.is_empty());
    }
}
