//! Installer-metadata accumulation: folds successive ARP-correlated submissions for a package
//! into a single [`ProductMetadata`] record, and fuses independently collected records for the
//! same submission via [`merge`].

use std::collections::{BTreeMap, HashMap};

use compact_str::CompactString;
use thiserror::Error;

use crate::{
    installer::{AppsAndFeaturesEntry, InstallationMetadata, MetadataFiles},
    locale::Icon,
    PackageVersion,
};

/// The sticky, three-valued scope recorded for an installer-metadata entry.
///
/// Unlike [`crate::installer::Scope`], this can also record that two submissions disagreed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetadataScope {
    User,
    Machine,
    /// Two submissions reported different scopes for the same installer hash.
    Unknown,
}

impl From<crate::installer::Scope> for MetadataScope {
    fn from(scope: crate::installer::Scope) -> Self {
        match scope {
            crate::installer::Scope::User => Self::User,
            crate::installer::Scope::Machine => Self::Machine,
        }
    }
}

fn merge_scope(a: Option<MetadataScope>, b: Option<MetadataScope>) -> Option<MetadataScope> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) if a == b => Some(a),
        (Some(_), Some(_)) => Some(MetadataScope::Unknown),
    }
}

/// Everything accumulated for a single installer hash.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InstallerMetadata {
    pub submission_identifier: CompactString,
    pub scope: Option<MetadataScope>,
    pub apps_and_features_entries: Vec<AppsAndFeaturesEntry>,
    pub installation_metadata: Option<InstallationMetadata>,
    pub startup_links: Vec<MetadataFiles>,
    pub icons: Vec<Icon>,
}

/// A retired installer-metadata entry, collapsed into sets when superseded by a new submission.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HistoricalMetadata {
    pub version_min: PackageVersion,
    pub version_max: PackageVersion,
    pub names: Vec<CompactString>,
    pub product_codes: Vec<CompactString>,
    pub publishers: Vec<CompactString>,
}

/// The accumulator persisted across installer-metadata-collection sessions for one package.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProductMetadata {
    pub schema_version: CompactString,
    pub product_version_min: Option<PackageVersion>,
    pub product_version_max: Option<PackageVersion>,
    pub installer_metadata_map: BTreeMap<CompactString, InstallerMetadata>,
    pub historical_metadata_list: Vec<HistoricalMetadata>,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum MetadataError {
    /// Raised by [`merge`] when the inputs do not all carry the same submission identifier.
    #[error("cannot merge metadata from different submissions")]
    NotValidState,
}

/// The identity `accumulate` needs from the correlated (or synthesized, for MSIX) ARP entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CorrelatedIdentity {
    pub display_name: CompactString,
    pub publisher: CompactString,
    pub display_version: CompactString,
    pub product_code: Option<CompactString>,
    pub scope: Option<MetadataScope>,
}

fn extend_version_range(
    metadata: &mut ProductMetadata,
    version: &PackageVersion,
) {
    metadata.product_version_min = Some(match metadata.product_version_min.take() {
        Some(current) if current <= *version => current,
        _ => version.clone(),
    });
    metadata.product_version_max = Some(match metadata.product_version_max.take() {
        Some(current) if current >= *version => current,
        _ => version.clone(),
    });
}

fn archive(metadata: &mut ProductMetadata) {
    if metadata.installer_metadata_map.is_empty() {
        return;
    }

    let (Some(min), Some(max)) =
        (metadata.product_version_min.clone(), metadata.product_version_max.clone())
    else {
        metadata.installer_metadata_map.clear();
        return;
    };

    let mut names = Vec::new();
    let mut product_codes = Vec::new();
    let mut publishers = Vec::new();
    for entry in metadata.installer_metadata_map.values() {
        for apps_and_features in &entry.apps_and_features_entries {
            if let Some(name) = &apps_and_features.display_name {
                names.push(name.clone());
            }
            if let Some(code) = &apps_and_features.product_code {
                product_codes.push(CompactString::from(code.as_str()));
            }
            if let Some(publisher) = &apps_and_features.publisher {
                publishers.push(publisher.clone());
            }
        }
    }
    names.sort_unstable();
    names.dedup();
    product_codes.sort_unstable();
    product_codes.dedup();
    publishers.sort_unstable();
    publishers.dedup();

    metadata.historical_metadata_list.push(HistoricalMetadata {
        version_min: min,
        version_max: max,
        names,
        product_codes,
        publishers,
    });
    metadata.installer_metadata_map.clear();
}

fn to_apps_and_features_entry(identity: &CorrelatedIdentity) -> AppsAndFeaturesEntry {
    AppsAndFeaturesEntry::new()
        .with_display_name::<_, CompactString>(Some(identity.display_name.clone()))
        .with_publisher::<_, CompactString>(Some(identity.publisher.clone()))
        .with_display_version::<_, crate::Version>(identity.display_version.parse::<crate::Version>().ok())
        .with_product_code(identity.product_code.as_ref().map(CompactString::to_string))
}

/// A field in `existing` is compatible with the same field in `candidate` if `existing` is absent
/// (already elided, so it imposes no constraint) or the two values are equal.
fn field_compatible<T: PartialEq>(existing: &Option<T>, candidate: &Option<T>) -> bool {
    existing.as_ref().is_none_or(|value| candidate.as_ref() == Some(value))
}

/// Tests whether `row` already represents `candidate`'s identity: every field where `row` still
/// carries a value agrees with `candidate`.
fn row_represents(row: &AppsAndFeaturesEntry, candidate: &AppsAndFeaturesEntry) -> bool {
    field_compatible(&row.display_name, &candidate.display_name)
        && field_compatible(&row.publisher, &candidate.publisher)
        && field_compatible(&row.display_version, &candidate.display_version)
        && field_compatible(&row.product_code, &candidate.product_code)
}

/// Elides each field of `candidate` that matches some existing row's non-empty value for that
/// same field, per the repeat-submission field-elision rule: a publisher-only diff produces a row
/// with only `Publisher` populated.
fn elide_fields_matching_existing(
    mut candidate: AppsAndFeaturesEntry,
    existing: &[AppsAndFeaturesEntry],
) -> AppsAndFeaturesEntry {
    if existing.iter().any(|row| row.display_name.is_some() && row.display_name == candidate.display_name) {
        candidate.display_name = None;
    }
    if existing.iter().any(|row| row.publisher.is_some() && row.publisher == candidate.publisher) {
        candidate.publisher = None;
    }
    if existing
        .iter()
        .any(|row| row.display_version.is_some() && row.display_version == candidate.display_version)
    {
        candidate.display_version = None;
    }
    if existing.iter().any(|row| row.product_code.is_some() && row.product_code == candidate.product_code) {
        candidate.product_code = None;
    }
    candidate
}

/// Folds a correlated submission into `current`, producing the next [`ProductMetadata`].
///
/// `schema_version` governs whether `installation_metadata`/`startup_links`/`icons` are attached:
/// schema 1.2 and above only, per the accumulation rules.
#[must_use]
pub fn accumulate(
    current: Option<ProductMetadata>,
    schema_version: &str,
    installer_hash: &str,
    submission_identifier: &str,
    version: &PackageVersion,
    identity: &CorrelatedIdentity,
    installation_metadata: Option<InstallationMetadata>,
    startup_links: Vec<MetadataFiles>,
    icons: Vec<Icon>,
) -> ProductMetadata {
    let mut metadata = current.unwrap_or_default();
    metadata.schema_version = schema_version.into();

    let attaches_collected_files =
        schema_version.parse::<crate::Version>().is_ok_and(|parsed| parsed >= "1.2".parse().unwrap());

    match metadata.installer_metadata_map.get_mut(installer_hash) {
        Some(existing) if existing.submission_identifier == submission_identifier => {
            let candidate = to_apps_and_features_entry(identity);
            let already_present =
                existing.apps_and_features_entries.iter().any(|row| row_represents(row, &candidate));
            if !already_present {
                let elided = elide_fields_matching_existing(candidate, &existing.apps_and_features_entries);
                existing.apps_and_features_entries.push(elided);
            }
            existing.scope = merge_scope(existing.scope, identity.scope);
            extend_version_range(&mut metadata, version);
            if attaches_collected_files {
                let slot = metadata.installer_metadata_map.get_mut(installer_hash).unwrap();
                slot.installation_metadata = installation_metadata;
                slot.startup_links = startup_links;
                slot.icons = icons;
            }
        }
        Some(_) => {
            extend_version_range(&mut metadata, version);
            let mut entry = InstallerMetadata {
                submission_identifier: submission_identifier.into(),
                scope: identity.scope,
                apps_and_features_entries: vec![to_apps_and_features_entry(identity)],
                ..InstallerMetadata::default()
            };
            if attaches_collected_files {
                entry.installation_metadata = installation_metadata;
                entry.startup_links = startup_links;
                entry.icons = icons;
            }
            metadata.installer_metadata_map.insert(installer_hash.into(), entry);
        }
        None => {
            let already_known_submission = metadata
                .installer_metadata_map
                .values()
                .any(|entry| entry.submission_identifier == submission_identifier);
            if !already_known_submission {
                archive(&mut metadata);
            }

            extend_version_range(&mut metadata, version);
            let mut entry = InstallerMetadata {
                submission_identifier: submission_identifier.into(),
                scope: identity.scope,
                apps_and_features_entries: vec![to_apps_and_features_entry(identity)],
                ..InstallerMetadata::default()
            };
            if attaches_collected_files {
                entry.installation_metadata = installation_metadata;
                entry.startup_links = startup_links;
                entry.icons = icons;
            }
            metadata.installer_metadata_map.insert(installer_hash.into(), entry);
        }
    }

    metadata
}

fn merge_installation_metadata(
    a: Option<InstallationMetadata>,
    b: Option<InstallationMetadata>,
) -> Option<InstallationMetadata> {
    let (a, b) = match (a, b) {
        (None, None) => return None,
        (Some(a), None) => return Some(a),
        (None, Some(b)) => return Some(b),
        (Some(a), Some(b)) => (a, b),
    };

    if a.default_install_location != b.default_install_location {
        return Some(InstallationMetadata::default());
    }

    let mut by_path: HashMap<_, _> =
        a.files.iter().map(|file| (file.relative_file_path.clone(), file.clone())).collect();
    for file in &b.files {
        match by_path.remove(&file.relative_file_path) {
            None => {
                by_path.insert(file.relative_file_path.clone(), file.clone());
            }
            Some(existing) if &existing == file => {
                by_path.insert(file.relative_file_path.clone(), existing);
            }
            Some(existing) => {
                by_path.insert(
                    file.relative_file_path.clone(),
                    MetadataFiles {
                        relative_file_path: file.relative_file_path.clone(),
                        file_sha_256: same_or_none(existing.file_sha_256, file.file_sha_256.clone()),
                        file_type: same_or_none(existing.file_type, file.file_type),
                        invocation_parameter: same_or_none(
                            existing.invocation_parameter,
                            file.invocation_parameter.clone(),
                        ),
                        display_name: same_or_none(existing.display_name, file.display_name.clone()),
                    },
                );
            }
        }
    }

    Some(InstallationMetadata {
        default_install_location: a.default_install_location,
        files: by_path.into_values().collect(),
    })
}

fn same_or_none<T: PartialEq>(a: Option<T>, b: Option<T>) -> Option<T> {
    if a == b {
        a
    } else {
        None
    }
}

fn merge_startup_links(a: Vec<MetadataFiles>, b: Vec<MetadataFiles>) -> Vec<MetadataFiles> {
    let mut by_path: Vec<MetadataFiles> = Vec::with_capacity(a.len() + b.len());
    for file in a.into_iter().chain(b) {
        if let Some(slot) = by_path.iter_mut().find(|existing| existing.relative_file_path == file.relative_file_path)
        {
            if *slot != file {
                *slot = MetadataFiles {
                    relative_file_path: slot.relative_file_path.clone(),
                    file_sha_256: same_or_none(slot.file_sha_256.clone(), file.file_sha_256),
                    file_type: same_or_none(slot.file_type, file.file_type),
                    invocation_parameter: same_or_none(
                        slot.invocation_parameter.clone(),
                        file.invocation_parameter,
                    ),
                    display_name: same_or_none(slot.display_name.clone(), file.display_name),
                };
            }
        } else {
            by_path.push(file);
        }
    }
    by_path
}

fn reduce_pair(mut a: ProductMetadata, b: ProductMetadata) -> Result<ProductMetadata, MetadataError> {
    if a.submission_identifier_disagrees(&b) {
        return Err(MetadataError::NotValidState);
    }

    for (hash, incoming) in b.installer_metadata_map {
        match a.installer_metadata_map.remove(&hash) {
            None => {
                a.installer_metadata_map.insert(hash, incoming);
            }
            Some(existing) => {
                let mut merged_entries = existing.apps_and_features_entries;
                for entry in incoming.apps_and_features_entries {
                    if !merged_entries.contains(&entry) {
                        merged_entries.push(entry);
                    }
                }
                a.installer_metadata_map.insert(
                    hash,
                    InstallerMetadata {
                        submission_identifier: existing.submission_identifier,
                        scope: merge_scope(existing.scope, incoming.scope),
                        apps_and_features_entries: merged_entries,
                        installation_metadata: merge_installation_metadata(
                            existing.installation_metadata,
                            incoming.installation_metadata,
                        ),
                        startup_links: merge_startup_links(existing.startup_links, incoming.startup_links),
                        icons: if incoming.icons.is_empty() { existing.icons } else { incoming.icons },
                    },
                );
            }
        }
    }

    a.product_version_min = min_option(a.product_version_min, b.product_version_min);
    a.product_version_max = max_option(a.product_version_max, b.product_version_max);

    for historical in b.historical_metadata_list {
        if !a.historical_metadata_list.iter().any(|existing| {
            existing.version_min == historical.version_min && existing.version_max == historical.version_max
        }) {
            a.historical_metadata_list.push(historical);
        }
    }

    Ok(a)
}

fn min_option(a: Option<PackageVersion>, b: Option<PackageVersion>) -> Option<PackageVersion> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => Some(if a <= b { a } else { b }),
    }
}

fn max_option(a: Option<PackageVersion>, b: Option<PackageVersion>) -> Option<PackageVersion> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => Some(if a >= b { a } else { b }),
    }
}

impl ProductMetadata {
    fn submission_identifier_disagrees(&self, other: &Self) -> bool {
        let mut self_ids: Vec<&str> = self
            .installer_metadata_map
            .values()
            .map(|entry| entry.submission_identifier.as_str())
            .collect();
        self_ids.sort_unstable();
        self_ids.dedup();

        let mut other_ids: Vec<&str> = other
            .installer_metadata_map
            .values()
            .map(|entry| entry.submission_identifier.as_str())
            .collect();
        other_ids.sort_unstable();
        other_ids.dedup();

        !self_ids.is_empty() && !other_ids.is_empty() && self_ids != other_ids
    }
}

/// Fuses N previously emitted [`ProductMetadata`] records, typically collected from different
/// machines for the same submission, via a pairwise left fold in list order.
pub fn merge(inputs: Vec<ProductMetadata>) -> Result<ProductMetadata, MetadataError> {
    let mut inputs = inputs.into_iter();
    let Some(first) = inputs.next() else {
        return Ok(ProductMetadata::default());
    };
    inputs.try_fold(first, reduce_pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(product_code: &str) -> CorrelatedIdentity {
        CorrelatedIdentity {
            display_name: "Test Package Name".into(),
            publisher: "Test Publisher".into(),
            display_version: "1.2.3".into(),
            product_code: Some(product_code.into()),
            scope: Some(MetadataScope::User),
        }
    }

    #[test]
    fn new_package_produces_a_single_entry_with_matching_range() {
        let version: PackageVersion = "1.2.3".parse().unwrap();
        let metadata = accumulate(
            None,
            "1.0",
            "ABCD",
            "1",
            &version,
            &identity("{guid}"),
            None,
            Vec::new(),
            Vec::new(),
        );

        assert_eq!(metadata.product_version_min, Some(version.clone()));
        assert_eq!(metadata.product_version_max, Some(version));
        assert_eq!(metadata.installer_metadata_map.len(), 1);
        let entry = &metadata.installer_metadata_map["ABCD"];
        assert_eq!(entry.apps_and_features_entries.len(), 1);
        assert!(metadata.historical_metadata_list.is_empty());
    }

    #[test]
    fn new_submission_archives_the_previous_entry() {
        let first_version: PackageVersion = "1.3.5".parse().unwrap();
        let first = accumulate(
            None,
            "1.0",
            "OLDHASH",
            "1",
            &first_version,
            &identity("{old-guid}"),
            None,
            Vec::new(),
            Vec::new(),
        );

        let second_version: PackageVersion = "1.4.0".parse().unwrap();
        let second = accumulate(
            Some(first),
            "1.0",
            "NEWHASH",
            "1_NEW",
            &second_version,
            &identity("{new-guid}"),
            None,
            Vec::new(),
            Vec::new(),
        );

        assert_eq!(second.installer_metadata_map.len(), 1);
        assert!(second.installer_metadata_map.contains_key("NEWHASH"));
        assert_eq!(second.historical_metadata_list.len(), 1);
        let historical = &second.historical_metadata_list[0];
        assert_eq!(historical.version_min, first_version);
        assert_eq!(historical.version_max, first_version);
    }

    #[test]
    fn merge_requires_matching_submission_identifiers() {
        let version: PackageVersion = "1.0.0".parse().unwrap();
        let a = accumulate(None, "1.0", "H1", "1", &version, &identity("{a}"), None, Vec::new(), Vec::new());
        let b = accumulate(None, "1.0", "H2", "2", &version, &identity("{b}"), None, Vec::new(), Vec::new());

        let result = merge(vec![a, b]);
        assert_eq!(result.unwrap_err(), MetadataError::NotValidState);
    }

    #[test]
    fn repeat_submission_elides_fields_matching_an_existing_row() {
        let version: PackageVersion = "1.2.3".parse().unwrap();
        let first = accumulate(
            None,
            "1.0",
            "ABCD",
            "1",
            &version,
            &identity("{guid}"),
            None,
            Vec::new(),
            Vec::new(),
        );

        let mut differing_publisher = identity("{guid}");
        differing_publisher.publisher = "Other Publisher".into();

        let second =
            accumulate(Some(first), "1.0", "ABCD", "1", &version, &differing_publisher, None, Vec::new(), Vec::new());

        let entries = &second.installer_metadata_map["ABCD"].apps_and_features_entries;
        assert_eq!(entries.len(), 2);
        let new_row = &entries[1];
        assert_eq!(new_row.publisher.as_deref(), Some("Other Publisher"));
        assert!(new_row.display_name.is_none());
        assert!(new_row.display_version.is_none());
        assert!(new_row.product_code.is_none());
    }

    #[test]
    fn merge_unions_apps_and_features_entries_by_installer_hash() {
        let version: PackageVersion = "1.0.0".parse().unwrap();
        let a = accumulate(None, "1.0", "H1", "1", &version, &identity("{a}"), None, Vec::new(), Vec::new());
        let b = accumulate(None, "1.0", "H1", "1", &version, &identity("{b}"), None, Vec::new(), Vec::new());

        let merged = merge(vec![a, b]).unwrap();
        assert_eq!(merged.installer_metadata_map["H1"].apps_and_features_entries.len(), 2);
    }
}
