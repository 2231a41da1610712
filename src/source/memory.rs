//! An in-memory [`Source`] backend, used by tests in place of an indexed store.

use compact_str::CompactString;

use super::{
    package::CatalogPackageVersion,
    search::{MatchType, PackageMatchField, PackageMatchFilter, SearchMatch, SearchRequest, SearchResult},
    Source, SourceDetails,
};

/// Holds a fixed set of [`CatalogPackageVersion`] rows and matches `SearchRequest`s against them
/// with straightforward string comparisons.
pub struct MemorySource {
    details: SourceDetails,
    packages: Vec<CatalogPackageVersion>,
}

impl MemorySource {
    #[must_use]
    pub fn new(details: SourceDetails, packages: Vec<CatalogPackageVersion>) -> Self {
        Self { details, packages }
    }

    fn field_value<'a>(package: &'a CatalogPackageVersion, field: PackageMatchField) -> Vec<&'a str> {
        match field {
            PackageMatchField::Id => vec![package.id.as_str()],
            PackageMatchField::Name => {
                let mut values = vec![package.name.as_str()];
                values.extend(package.names.iter().map(CompactString::as_str));
                values
            }
            PackageMatchField::Moniker => vec![package.moniker.as_str()],
            PackageMatchField::Command => package.commands.iter().map(CompactString::as_str).collect(),
            PackageMatchField::Tag => package.tags.iter().map(CompactString::as_str).collect(),
            PackageMatchField::PackageFamilyName => {
                package.package_family_names.iter().map(CompactString::as_str).collect()
            }
            PackageMatchField::ProductCode => package.product_codes.iter().map(CompactString::as_str).collect(),
            PackageMatchField::UpgradeCode => package.upgrade_codes.iter().map(CompactString::as_str).collect(),
        }
    }

    fn matches_filter(value: &str, filter: &PackageMatchFilter) -> bool {
        match filter.match_type {
            MatchType::Exact => value == filter.value,
            MatchType::CaseInsensitive => value.eq_ignore_ascii_case(&filter.value),
            MatchType::StartsWith => value.to_lowercase().starts_with(&*filter.value.to_lowercase()),
            MatchType::Substring => value.to_lowercase().contains(&*filter.value.to_lowercase()),
            MatchType::Wildcard => {
                wildcard_match(&value.to_lowercase(), &filter.value.to_lowercase())
            }
            MatchType::Fuzzy => {
                strsim::normalized_levenshtein(&value.to_lowercase(), &filter.value.to_lowercase()) >= 0.7
            }
        }
    }

    fn best_match(package: &CatalogPackageVersion, filter: &PackageMatchFilter) -> bool {
        Self::field_value(package, filter.field).into_iter().any(|value| Self::matches_filter(value, filter))
    }
}

fn wildcard_match(value: &str, pattern: &str) -> bool {
    match pattern.split_once('*') {
        None => value == pattern,
        Some((prefix, suffix)) => value.starts_with(prefix) && value.ends_with(suffix),
    }
}

impl Source for MemorySource {
    fn details(&self) -> &SourceDetails {
        &self.details
    }

    fn search(&self, request: &SearchRequest) -> SearchResult<CatalogPackageVersion> {
        let mut matches = Vec::new();

        for package in &self.packages {
            if request.is_for_everything() {
                if let Some(filter) = &request.query {
                    matches.push(SearchMatch { package: package.clone(), filter: filter.clone() });
                    continue;
                }
                matches.push(SearchMatch {
                    package: package.clone(),
                    filter: PackageMatchFilter::new(PackageMatchField::Id, MatchType::Substring, ""),
                });
                continue;
            }

            if !request.filters.iter().all(|filter| Self::best_match(package, filter)) {
                continue;
            }

            let Some(query) = &request.query else { continue };
            if Self::best_match(package, query) {
                matches.push(SearchMatch { package: package.clone(), filter: query.clone() });
                continue;
            }

            if let Some(inclusion) =
                request.inclusions.iter().find(|inclusion| Self::best_match(package, inclusion))
            {
                matches.push(SearchMatch { package: package.clone(), filter: inclusion.clone() });
            }
        }

        SearchResult::ordered(matches, request.maximum_results)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{source::SourceOrigin, PackageIdentifier};

    fn details(name: &str) -> SourceDetails {
        SourceDetails {
            name: name.into(),
            identifier: name.into(),
            r#type: "memory".into(),
            arg: CompactString::default(),
            data: CompactString::default(),
            last_update_time: Utc::now(),
            trust_level: super::super::TrustLevel::empty(),
            origin: SourceOrigin::User,
            is_tombstoned: false,
        }
    }

    fn package(id: &str, name: &str) -> CatalogPackageVersion {
        CatalogPackageVersion {
            id: PackageIdentifier::new(id).unwrap(),
            name: name.into(),
            version: "1.0.0".parse().unwrap(),
            channel: CompactString::default(),
            source_identifier: "src".into(),
            relative_path: CompactString::default(),
            manifest_sha_256: None,
            arp_min_version: None,
            arp_max_version: None,
            publisher: "Pub".into(),
            moniker: CompactString::default(),
            package_family_names: Vec::new(),
            product_codes: Vec::new(),
            upgrade_codes: Vec::new(),
            names: Vec::new(),
            publishers: Vec::new(),
            locales: Vec::new(),
            tags: Vec::new(),
            commands: Vec::new(),
        }
    }

    #[test]
    fn exact_id_query_matches_by_identifier() {
        let source = MemorySource::new(
            details("src1"),
            vec![package("Pub.App", "App"), package("Pub.Other", "Other")],
        );
        let request = SearchRequest {
            query: Some(PackageMatchFilter::new(PackageMatchField::Id, MatchType::Exact, "Pub.App")),
            ..SearchRequest::default()
        };

        let result = source.search(&request);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].package.id.as_str(), "Pub.App");
    }
}
