//! Logical packages and catalog-facing package version views.

use compact_str::CompactString;

use crate::{PackageIdentifier, PackageVersion};

/// A version available for a package from one source, under a channel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageVersionKey {
    pub version: PackageVersion,
    pub channel: CompactString,
    pub source_id: CompactString,
}

/// A logical package identified by [`PackageIdentifier`] within a source: an ordered list of the
/// versions that source carries for it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Package {
    pub identifier: PackageIdentifier,
    pub source_id: CompactString,
    pub versions: Vec<PackageVersionKey>,
}

impl Package {
    #[must_use]
    pub fn new(identifier: PackageIdentifier, source_id: impl Into<CompactString>) -> Self {
        Self { identifier, source_id: source_id.into(), versions: Vec::new() }
    }

    /// The highest version this package carries, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&PackageVersionKey> {
        self.versions.iter().max_by(|a, b| a.version.cmp(&b.version))
    }
}

/// A view over a manifest's package identity combined with the source it came from. Named
/// `CatalogPackageVersion` to avoid colliding with [`crate::ManifestType`]'s sibling manifest
/// field type, `PackageVersion` itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogPackageVersion {
    pub id: PackageIdentifier,
    pub name: CompactString,
    pub version: PackageVersion,
    pub channel: CompactString,
    pub source_identifier: CompactString,
    pub relative_path: CompactString,
    pub manifest_sha_256: Option<CompactString>,
    pub arp_min_version: Option<PackageVersion>,
    pub arp_max_version: Option<PackageVersion>,
    pub publisher: CompactString,
    pub moniker: CompactString,
    pub package_family_names: Vec<CompactString>,
    pub product_codes: Vec<CompactString>,
    pub upgrade_codes: Vec<CompactString>,
    pub names: Vec<CompactString>,
    pub publishers: Vec<CompactString>,
    pub locales: Vec<CompactString>,
    pub tags: Vec<CompactString>,
    pub commands: Vec<CompactString>,
}

impl CatalogPackageVersion {
    /// Case-folds the multi-valued properties that participate in ARP correlation, as required
    /// on ingestion.
    pub fn fold_case_for_correlation(&mut self) {
        for value in &mut self.package_family_names {
            *value = value.to_lowercase().into();
        }
        for value in &mut self.product_codes {
            *value = value.to_lowercase().into();
        }
        for value in &mut self.upgrade_codes {
            *value = value.to_lowercase().into();
        }
    }
}

/// One installed view and zero or more available views of the same logical package, fused by the
/// composite source's correlation rule.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompositePackage {
    pub installed: Option<CatalogPackageVersion>,
    pub available: Vec<CatalogPackageVersion>,
}

impl CompositePackage {
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.installed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_picks_the_highest_version() {
        let mut package = Package::new(PackageIdentifier::new("Pub.App").unwrap(), "src1");
        package.versions.push(PackageVersionKey {
            version: "1.0.0".parse().unwrap(),
            channel: CompactString::default(),
            source_id: "src1".into(),
        });
        package.versions.push(PackageVersionKey {
            version: "2.0.0".parse().unwrap(),
            channel: CompactString::default(),
            source_id: "src1".into(),
        });

        assert_eq!(package.latest().unwrap().version, "2.0.0".parse().unwrap());
    }

    #[test]
    fn case_folding_lowercases_correlation_fields() {
        let mut version = CatalogPackageVersion {
            id: PackageIdentifier::new("Pub.App").unwrap(),
            name: "App".into(),
            version: "1.0.0".parse().unwrap(),
            channel: CompactString::default(),
            source_identifier: "src1".into(),
            relative_path: CompactString::default(),
            manifest_sha_256: None,
            arp_min_version: None,
            arp_max_version: None,
            publisher: "Pub".into(),
            moniker: CompactString::default(),
            package_family_names: vec!["App_8wekyb3d8bbwe".into()],
            product_codes: vec!["{GUID}".into()],
            upgrade_codes: Vec::new(),
            names: Vec::new(),
            publishers: Vec::new(),
            locales: Vec::new(),
            tags: Vec::new(),
            commands: Vec::new(),
        };

        version.fold_case_for_correlation();
        assert_eq!(version.product_codes[0], "{guid}");
    }
}
