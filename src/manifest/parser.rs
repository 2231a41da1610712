//! Multi-document ingestion: turns one or more manifest files into a single [`PackageManifest`],
//! running the field-driven diagnostics and validation passes described alongside the DOM.

use crate::{
    installer::{InstallerManifest, Markets, UpgradeBehavior},
    locale::{DefaultLocaleManifest, LocaleManifest},
    version::VersionManifest,
    GenericManifest, ManifestType, ManifestVersion,
};

use super::{
    de::from_node,
    dom::{parse_documents, DomError, Node, YamlSyntaxError},
    encoding,
    schema::{self, FieldLookup},
    validate::{Level, ManifestException, MessageId, ValidationError},
    PackageManifest,
};

/// Decodes and parses a single-document YAML file, for non-manifest documents (e.g. the source
/// registry) that still go through the one YAML façade in this crate.
pub fn decode_and_parse_single_document(bytes: &[u8]) -> Result<Node, YamlSyntaxError> {
    let text = encoding::decode(bytes);
    Ok(parse_documents(&text)?.into_iter().next().unwrap_or_else(Node::invalid))
}

/// One manifest file as presented to the parser: a name (for diagnostics) and raw bytes (encoding
/// is detected per file).
pub struct ManifestFile<'a> {
    pub file_name: &'a str,
    pub bytes: &'a [u8],
}

struct Document<'a> {
    file_name: &'a str,
    manifest_type: ManifestType,
    node: Node,
}

/// Parses one or more manifest files into a single merged [`PackageManifest`].
///
/// Returns `Ok((manifest, warnings))` if parsing succeeds, possibly with warnings (e.g.
/// `FieldUnknown`); returns `Err(exception)` carrying every finding, including the warnings, if
/// any finding is an error or if `throw_on_warning` is set and there is at least one warning.
pub fn parse(
    files: &[ManifestFile<'_>],
    throw_on_warning: bool,
) -> Result<(PackageManifest, Vec<ValidationError>), ManifestException> {
    let mut findings = Vec::new();
    let mut documents = Vec::with_capacity(files.len());

    for file in files {
        let text = encoding::decode(file.bytes);
        let parsed = match parse_documents(&text) {
            Ok(docs) => docs,
            Err(err) => {
                findings.push(
                    ValidationError::new(MessageId::InvalidFieldValue, "<document>", Level::Error)
                        .with_value(err.to_string())
                        .with_file_name(file.file_name.to_owned()),
                );
                continue;
            }
        };
        let Some(node) = parsed.into_iter().next() else {
            continue;
        };
        let manifest_type = match generic_manifest_type(&node) {
            Ok(manifest_type) => manifest_type,
            Err(finding) => {
                findings.push(finding.with_file_name(file.file_name.to_owned()));
                continue;
            }
        };
        documents.push(Document { file_name: file.file_name, manifest_type, node });
    }

    if let [document] = documents.as_slice() {
        if document.manifest_type == ManifestType::Singleton {
            return parse_singleton(document, findings, throw_on_warning);
        }
    }

    for document in &documents {
        findings.extend(field_diagnostics(document));
    }

    let version_docs: Vec<_> =
        documents.iter().filter(|doc| doc.manifest_type == ManifestType::Version).collect();
    let installer_docs: Vec<_> =
        documents.iter().filter(|doc| doc.manifest_type == ManifestType::Installer).collect();
    let default_locale_docs: Vec<_> = documents
        .iter()
        .filter(|doc| doc.manifest_type == ManifestType::DefaultLocale)
        .collect();
    let locale_docs: Vec<_> =
        documents.iter().filter(|doc| doc.manifest_type == ManifestType::Locale).collect();

    for (kind, docs) in [
        ("Version", &version_docs),
        ("Installer", &installer_docs),
        ("DefaultLocale", &default_locale_docs),
    ] {
        if docs.len() > 1 {
            findings.push(ValidationError::new(
                MessageId::DuplicateMultiFileManifestType,
                kind,
                Level::Error,
            ));
        }
    }

    if version_docs.is_empty() || installer_docs.is_empty() || default_locale_docs.is_empty() {
        findings.push(ValidationError::new(
            MessageId::IncompleteMultiFileManifest,
            "a complete manifest requires Version, Installer, and DefaultLocale documents",
            Level::Error,
        ));
        return Err(ManifestException::new(findings));
    }

    let version_manifest: VersionManifest = match from_node(&version_docs[0].node) {
        Ok(manifest) => manifest,
        Err(err) => {
            findings.push(
                ValidationError::new(MessageId::InvalidFieldValue, "Version", Level::Error)
                    .with_value(err.to_string()),
            );
            return Err(ManifestException::new(findings));
        }
    };
    let installer_manifest: InstallerManifest = match from_node(&installer_docs[0].node) {
        Ok(manifest) => manifest,
        Err(err) => {
            findings.push(
                ValidationError::new(MessageId::InvalidFieldValue, "Installer", Level::Error)
                    .with_value(err.to_string()),
            );
            return Err(ManifestException::new(findings));
        }
    };
    let default_locale_manifest: DefaultLocaleManifest =
        match from_node(&default_locale_docs[0].node) {
            Ok(manifest) => manifest,
            Err(err) => {
                findings.push(
                    ValidationError::new(MessageId::InvalidFieldValue, "DefaultLocale", Level::Error)
                        .with_value(err.to_string()),
                );
                return Err(ManifestException::new(findings));
            }
        };

    let mut locale_manifests = Vec::with_capacity(locale_docs.len());
    for doc in &locale_docs {
        match from_node::<LocaleManifest>(&doc.node) {
            Ok(manifest) => locale_manifests.push(manifest),
            Err(err) => findings.push(
                ValidationError::new(MessageId::InvalidFieldValue, "Locale", Level::Error)
                    .with_value(err.to_string())
                    .with_file_name(doc.file_name.to_owned()),
            ),
        }
    }

    findings.extend(check_identity_consistency(
        &version_manifest,
        &installer_manifest,
        &default_locale_manifest,
        &locale_manifests,
    ));
    findings.extend(check_semantic(&installer_manifest));

    if findings.iter().any(|finding| finding.level == Level::Error) {
        return Err(ManifestException::new(findings));
    }

    let manifest = PackageManifest::merge(
        version_manifest,
        installer_manifest,
        default_locale_manifest,
        &locale_manifests,
    );

    if throw_on_warning && !findings.is_empty() {
        return Err(ManifestException::new(findings));
    }

    Ok((manifest, findings))
}

/// Ingests a single document declaring `ManifestType: singleton`: such a document folds Version,
/// Installer, and DefaultLocale fields into one mapping, so it is deserialized as an Installer
/// document and a DefaultLocale document against the same node rather than split across files.
fn parse_singleton(
    document: &Document<'_>,
    mut findings: Vec<ValidationError>,
    throw_on_warning: bool,
) -> Result<(PackageManifest, Vec<ValidationError>), ManifestException> {
    findings.extend(field_diagnostics(document));

    let installer_manifest: InstallerManifest = match from_node(&document.node) {
        Ok(manifest) => manifest,
        Err(err) => {
            findings.push(
                ValidationError::new(MessageId::InvalidFieldValue, "Installer", Level::Error)
                    .with_value(err.to_string())
                    .with_file_name(document.file_name.to_owned()),
            );
            return Err(ManifestException::new(findings));
        }
    };
    let default_locale_manifest: DefaultLocaleManifest = match from_node(&document.node) {
        Ok(manifest) => manifest,
        Err(err) => {
            findings.push(
                ValidationError::new(MessageId::InvalidFieldValue, "DefaultLocale", Level::Error)
                    .with_value(err.to_string())
                    .with_file_name(document.file_name.to_owned()),
            );
            return Err(ManifestException::new(findings));
        }
    };

    if installer_manifest.package_identifier != default_locale_manifest.package_identifier
        || installer_manifest.package_version != default_locale_manifest.package_version
    {
        findings.push(ValidationError::new(
            MessageId::InconsistentMultiFileManifestFieldValue,
            "PackageIdentifier",
            Level::Error,
        ));
    }

    if installer_manifest.manifest_version > ManifestVersion::new(1, 10, 0) {
        findings.push(ValidationError::new(
            MessageId::UnsupportedManifestVersion,
            "ManifestVersion",
            Level::Error,
        ));
    }
    findings.extend(check_semantic(&installer_manifest));

    if findings.iter().any(|finding| finding.level == Level::Error) {
        return Err(ManifestException::new(findings));
    }

    let manifest = PackageManifest {
        package_identifier: installer_manifest.package_identifier.clone(),
        package_version: installer_manifest.package_version.clone(),
        manifest_version: installer_manifest.manifest_version,
        manifest_type: ManifestType::Singleton,
        installer: installer_manifest,
        default_localization: default_locale_manifest,
        localizations: Vec::new(),
    };

    if throw_on_warning && !findings.is_empty() {
        return Err(ManifestException::new(findings));
    }

    Ok((manifest, findings))
}

fn generic_manifest_type(node: &Node) -> Result<ManifestType, ValidationError> {
    from_node::<GenericManifest>(node).map(|generic| generic.r#type).map_err(|err| {
        ValidationError::new(MessageId::InvalidFieldValue, "ManifestType", Level::Error)
            .with_value(err.to_string())
    })
}

fn field_diagnostics(document: &Document<'_>) -> Vec<ValidationError> {
    let mut findings = Vec::new();
    let Some(mapping) = document.node.as_mapping() else {
        return findings;
    };
    let fields = schema::fields_for(document.manifest_type);

    let mut seen = std::collections::HashSet::new();
    for (key, value) in mapping.iter() {
        match mapping.get(key) {
            Err(DomError::DuplicateMappingKey(_)) => {
                if seen.insert(key.to_owned()) {
                    findings.push(
                        ValidationError::new(MessageId::FieldDuplicate, key, Level::Error)
                            .with_mark(value.mark)
                            .with_file_name(document.file_name.to_owned()),
                    );
                }
                continue;
            }
            _ => {}
        }
        match schema::lookup(fields, key) {
            FieldLookup::Known(_) => {}
            FieldLookup::WrongCase(field) => findings.push(
                ValidationError::new(MessageId::FieldIsNotPascalCase, field.name, Level::Warning)
                    .with_value(key.to_owned())
                    .with_mark(value.mark)
                    .with_file_name(document.file_name.to_owned()),
            ),
            FieldLookup::Unknown => findings.push(
                ValidationError::new(MessageId::FieldUnknown, key, Level::Warning)
                    .with_mark(value.mark)
                    .with_file_name(document.file_name.to_owned()),
            ),
        }
    }
    findings
}

fn check_identity_consistency(
    version: &VersionManifest,
    installer: &InstallerManifest,
    default_locale: &DefaultLocaleManifest,
    locales: &[LocaleManifest],
) -> Vec<ValidationError> {
    let mut findings = Vec::new();

    if version.package_identifier != installer.package_identifier
        || version.package_identifier != default_locale.package_identifier
        || locales.iter().any(|locale| locale.package_identifier != version.package_identifier)
    {
        findings.push(ValidationError::new(
            MessageId::InconsistentMultiFileManifestFieldValue,
            "PackageIdentifier",
            Level::Error,
        ));
    }

    if version.package_version != installer.package_version
        || version.package_version != default_locale.package_version
        || locales.iter().any(|locale| locale.package_version != version.package_version)
    {
        findings.push(ValidationError::new(
            MessageId::InconsistentMultiFileManifestFieldValue,
            "PackageVersion",
            Level::Error,
        ));
    }

    if version.manifest_version != installer.manifest_version
        || version.manifest_version != default_locale.manifest_version
    {
        findings.push(ValidationError::new(
            MessageId::InconsistentMultiFileManifestFieldValue,
            "ManifestVersion",
            Level::Error,
        ));
    }

    if version.default_locale != default_locale.package_locale {
        findings.push(ValidationError::new(
            MessageId::InconsistentMultiFileManifestFieldValue,
            "DefaultLocale",
            Level::Error,
        ));
    }

    if version.manifest_version > ManifestVersion::new(1, 10, 0) {
        findings.push(ValidationError::new(
            MessageId::UnsupportedManifestVersion,
            "ManifestVersion",
            Level::Error,
        ));
    }

    findings
}

fn check_semantic(installer: &InstallerManifest) -> Vec<ValidationError> {
    let mut findings = Vec::new();

    let mut seen = std::collections::HashSet::new();
    for entry in &installer.installers {
        let key = (entry.architecture, entry.r#type, entry.scope, entry.locale.clone());
        if !seen.insert(key) {
            findings.push(ValidationError::new(
                MessageId::DuplicateInstaller,
                "Installers",
                Level::Error,
            ));
        }
    }

    let root_conflict = installer.require_explicit_upgrade
        && installer.upgrade_behavior == Some(UpgradeBehavior::UninstallPrevious);
    let installer_conflict = installer.installers.iter().any(|entry| {
        (installer.require_explicit_upgrade || entry.require_explicit_upgrade)
            && matches!(
                entry.upgrade_behavior.or(installer.upgrade_behavior),
                Some(UpgradeBehavior::UninstallPrevious)
            )
    });
    if root_conflict || installer_conflict {
        findings.push(ValidationError::new(
            MessageId::RequireExplicitUpgradeConflict,
            "RequireExplicitUpgrade",
            Level::Error,
        ));
    }

    // `Markets` is modelled as `Allowed(..) | Excluded(..)`, so the two lists can never coexist;
    // `MutuallyExclusiveMarkets` is unreachable by construction and has no runtime check here.
    let _: Option<&Markets> = installer.markets.as_ref();

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file<'a>(name: &'a str, text: &'a str) -> (&'a str, Vec<u8>) {
        (name, text.as_bytes().to_vec())
    }

    #[test]
    fn parses_and_merges_a_complete_three_file_manifest() {
        let version = file(
            "a.b.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nDefaultLocale: en-US\nManifestType: version\nManifestVersion: 1.6.0\n",
        );
        let installer = file(
            "a.b.installer.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nInstallerLocale: en-US\nManifestType: installer\nManifestVersion: 1.6.0\nInstallers:\n  - Architecture: x64\n    InstallerUrl: https://example.com/a.exe\n    InstallerSha256: 0000000000000000000000000000000000000000000000000000000000000001\n",
        );
        let default_locale = file(
            "a.b.locale.en-US.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nPackageLocale: en-US\nPublisher: A\nPackageName: B\nLicense: MIT\nShortDescription: desc\nManifestType: defaultLocale\nManifestVersion: 1.6.0\n",
        );

        let files = vec![version, installer, default_locale];
        let manifest_files: Vec<_> = files
            .iter()
            .map(|(name, bytes)| ManifestFile { file_name: name, bytes })
            .collect();

        let (manifest, warnings) = parse(&manifest_files, false).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(manifest.package_identifier.as_str(), "A.B");
        assert_eq!(manifest.manifest_type, ManifestType::Installer);
    }

    #[test]
    fn mismatched_package_identifier_is_an_error() {
        let version = file(
            "a.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nDefaultLocale: en-US\nManifestType: version\nManifestVersion: 1.6.0\n",
        );
        let installer = file(
            "a.installer.yaml",
            "PackageIdentifier: A.C\nPackageVersion: 1.0.0\nInstallerLocale: en-US\nManifestType: installer\nManifestVersion: 1.6.0\nInstallers:\n  - Architecture: x64\n    InstallerUrl: https://example.com/a.exe\n    InstallerSha256: 0000000000000000000000000000000000000000000000000000000000000001\n",
        );
        let default_locale = file(
            "a.locale.en-US.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nPackageLocale: en-US\nPublisher: A\nPackageName: B\nLicense: MIT\nShortDescription: desc\nManifestType: defaultLocale\nManifestVersion: 1.6.0\n",
        );
        let files = vec![version, installer, default_locale];
        let manifest_files: Vec<_> = files
            .iter()
            .map(|(name, bytes)| ManifestFile { file_name: name, bytes })
            .collect();

        let err = parse(&manifest_files, false).unwrap_err();
        assert!(err
            .errors
            .iter()
            .any(|e| e.message_id == MessageId::InconsistentMultiFileManifestFieldValue));
    }

    #[test]
    fn unknown_field_is_a_warning_not_an_error() {
        let version = file(
            "a.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nDefaultLocale: en-US\nManifestType: version\nManifestVersion: 1.6.0\nNotAField: x\n",
        );
        let installer = file(
            "a.installer.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nInstallerLocale: en-US\nManifestType: installer\nManifestVersion: 1.6.0\nInstallers:\n  - Architecture: x64\n    InstallerUrl: https://example.com/a.exe\n    InstallerSha256: 0000000000000000000000000000000000000000000000000000000000000001\n",
        );
        let default_locale = file(
            "a.locale.en-US.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nPackageLocale: en-US\nPublisher: A\nPackageName: B\nLicense: MIT\nShortDescription: desc\nManifestType: defaultLocale\nManifestVersion: 1.6.0\n",
        );
        let files = vec![version, installer, default_locale];
        let manifest_files: Vec<_> = files
            .iter()
            .map(|(name, bytes)| ManifestFile { file_name: name, bytes })
            .collect();

        let (_manifest, warnings) = parse(&manifest_files, false).unwrap();
        assert!(warnings.iter().any(|w| w.message_id == MessageId::FieldUnknown));
    }

    #[test]
    fn parses_a_singleton_manifest_from_one_document() {
        let singleton = file(
            "a.b.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nPublisher: A\nPackageName: B\nLicense: MIT\nShortDescription: desc\nPackageLocale: en-US\nInstallerLocale: en-US\nManifestType: singleton\nManifestVersion: 1.6.0\nInstallers:\n  - Architecture: x64\n    InstallerUrl: https://example.com/a.exe\n    InstallerSha256: 0000000000000000000000000000000000000000000000000000000000000001\n",
        );
        let manifest_files = [ManifestFile { file_name: singleton.0, bytes: &singleton.1 }];

        let (manifest, warnings) = parse(&manifest_files, false).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(manifest.package_identifier.as_str(), "A.B");
        assert_eq!(manifest.manifest_type, ManifestType::Singleton);
        assert_eq!(manifest.default_localization.package_locale.to_string(), "en-US");
        assert!(manifest.localizations.is_empty());
    }

    #[test]
    fn singleton_manifest_still_runs_semantic_checks() {
        let singleton = file(
            "a.b.yaml",
            "PackageIdentifier: A.B\nPackageVersion: 1.0.0\nPublisher: A\nPackageName: B\nLicense: MIT\nShortDescription: desc\nPackageLocale: en-US\nInstallerLocale: en-US\nManifestType: singleton\nManifestVersion: 1.6.0\nRequireExplicitUpgrade: true\nUpgradeBehavior: uninstallPrevious\nInstallers:\n  - Architecture: x64\n    InstallerUrl: https://example.com/a.exe\n    InstallerSha256: 0000000000000000000000000000000000000000000000000000000000000001\n",
        );
        let manifest_files = [ManifestFile { file_name: singleton.0, bytes: &singleton.1 }];

        let err = parse(&manifest_files, false).unwrap_err();
        assert!(err.errors.iter().any(|e| e.message_id == MessageId::RequireExplicitUpgradeConflict));
    }
}
