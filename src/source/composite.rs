//! Aggregates several leaf sources behind one [`Source`] implementation, and fuses installed and
//! available views of the same logical package.

use chrono::Utc;
use compact_str::CompactString;

use super::{
    package::{CatalogPackageVersion, CompositePackage},
    search::{SearchMatch, SearchRequest, SearchResult},
    Source, SourceDetails, SourceOrigin, TrustLevel,
};

/// Executes a request against every constituent source and fuses the results with the global
/// ordering rule. One constituent, identified by name, is treated as the `Installed` source for
/// fusion purposes; the rest are `Available` sources.
pub struct CompositeSource {
    details: SourceDetails,
    installed_source_name: Option<CompactString>,
    sources: Vec<Box<dyn Source>>,
}

impl CompositeSource {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn Source>>, installed_source_name: Option<CompactString>) -> Self {
        let details = SourceDetails {
            name: "*Composite".into(),
            identifier: "*Composite".into(),
            r#type: CompactString::default(),
            arg: CompactString::default(),
            data: CompactString::default(),
            last_update_time: Utc::now(),
            trust_level: TrustLevel::empty(),
            origin: SourceOrigin::Predefined,
            is_tombstoned: false,
        };
        Self { details, installed_source_name, sources }
    }

    /// Runs `request` against every constituent source and groups the results into
    /// [`CompositePackage`]s, fusing an installed view with any available view that correlates
    /// with it by identifier, package family name, product code, or upgrade code.
    #[must_use]
    pub fn search_composite(&self, request: &SearchRequest) -> Vec<CompositePackage> {
        let aggregated = self.search(request);

        let mut composites: Vec<CompositePackage> = Vec::new();
        for matched in aggregated.matches {
            let is_installed = self
                .installed_source_name
                .as_deref()
                .is_some_and(|name| name == matched.package.source_identifier);

            if is_installed {
                if let Some(existing) = composites.iter_mut().find(|c| correlates(&c.installed, &matched.package))
                {
                    existing.installed = Some(matched.package);
                } else {
                    composites.push(CompositePackage { installed: Some(matched.package), available: Vec::new() });
                }
                continue;
            }

            if let Some(existing) = composites
                .iter_mut()
                .find(|c| c.installed.as_ref().is_some_and(|installed| correlates_pair(installed, &matched.package)))
            {
                existing.available.push(matched.package);
            } else {
                composites.push(CompositePackage { installed: None, available: vec![matched.package] });
            }
        }

        composites
    }
}

fn correlates(installed: &Option<CatalogPackageVersion>, candidate: &CatalogPackageVersion) -> bool {
    installed.as_ref().is_some_and(|installed| correlates_pair(installed, candidate))
}

fn correlates_pair(a: &CatalogPackageVersion, b: &CatalogPackageVersion) -> bool {
    a.id == b.id
        || shares_case_folded(&a.package_family_names, &b.package_family_names)
        || shares_case_folded(&a.product_codes, &b.product_codes)
        || shares_case_folded(&a.upgrade_codes, &b.upgrade_codes)
}

fn shares_case_folded(a: &[CompactString], b: &[CompactString]) -> bool {
    a.iter().any(|left| b.iter().any(|right| left.eq_ignore_ascii_case(right)))
}

impl Source for CompositeSource {
    fn details(&self) -> &SourceDetails {
        &self.details
    }

    fn is_composite(&self) -> bool {
        true
    }

    fn search(&self, request: &SearchRequest) -> SearchResult<CatalogPackageVersion> {
        let mut matches: Vec<SearchMatch<CatalogPackageVersion>> = Vec::new();
        for source in &self.sources {
            matches.extend(source.search(request).matches);
        }
        SearchResult::ordered(matches, request.maximum_results)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        source::{
            memory::MemorySource,
            search::{MatchType, PackageMatchField, PackageMatchFilter},
        },
        PackageIdentifier,
    };

    fn details(name: &str) -> SourceDetails {
        SourceDetails {
            name: name.into(),
            identifier: name.into(),
            r#type: "memory".into(),
            arg: CompactString::default(),
            data: CompactString::default(),
            last_update_time: Utc::now(),
            trust_level: TrustLevel::empty(),
            origin: SourceOrigin::User,
            is_tombstoned: false,
        }
    }

    fn package(id: &str, name: &str, source_identifier: &str) -> CatalogPackageVersion {
        CatalogPackageVersion {
            id: PackageIdentifier::new(id).unwrap(),
            name: name.into(),
            version: "1.0.0".parse().unwrap(),
            channel: CompactString::default(),
            source_identifier: source_identifier.into(),
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
    fn aggregated_search_orders_by_rank_then_source_insertion_and_truncates() {
        let src1 = MemorySource::new(
            details("src1"),
            vec![package("Pub.App", "App", "src1"), package("Pub.App2", "AppName", "src1")],
        );
        let src2 = MemorySource::new(
            details("src2"),
            vec![package("Pub.App", "App", "src2"), package("Pub.App2", "AppName", "src2")],
        );
        let composite = CompositeSource::new(vec![Box::new(src1), Box::new(src2)], None);

        let request = SearchRequest {
            query: Some(PackageMatchFilter::new(PackageMatchField::Id, MatchType::Exact, "Pub.App")),
            inclusions: vec![
                PackageMatchFilter::new(PackageMatchField::Name, MatchType::Exact, "AppName"),
                PackageMatchFilter::new(PackageMatchField::Id, MatchType::CaseInsensitive, "pub.app"),
            ],
            filters: Vec::new(),
            maximum_results: Some(3),
        };

        let result = composite.search(&request);
        assert!(result.truncated);
        assert_eq!(result.matches.len(), 3);
        assert_eq!(result.matches[0].package.source_identifier, "src1");
        assert_eq!(result.matches[0].filter.match_type, MatchType::Exact);
        assert_eq!(result.matches[1].package.source_identifier, "src2");
        assert_eq!(result.matches[1].filter.match_type, MatchType::Exact);
        assert_eq!(result.matches[2].package.source_identifier, "src1");
    }
}
