//! The request/result shapes for searching across one or more sources.

use compact_str::CompactString;

/// The package property a [`PackageMatchFilter`] is matched against.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PackageMatchField {
    Id,
    Name,
    Moniker,
    Command,
    Tag,
    PackageFamilyName,
    ProductCode,
    UpgradeCode,
}

/// How a [`PackageMatchFilter`]'s value is compared against a candidate field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MatchType {
    Exact,
    CaseInsensitive,
    StartsWith,
    Substring,
    Wildcard,
    Fuzzy,
}

/// One criterion: "does `field` match `value`, compared via `match_type`".
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PackageMatchFilter {
    pub field: PackageMatchField,
    pub match_type: MatchType,
    pub value: CompactString,
}

impl PackageMatchFilter {
    #[must_use]
    pub fn new(field: PackageMatchField, match_type: MatchType, value: impl Into<CompactString>) -> Self {
        Self { field, match_type, value: value.into() }
    }

    /// The ordering rank of this filter's `(match_type, field)` pair: lower sorts first.
    ///
    /// Exact/Id, Exact/Name, Exact/other, CaseInsensitive/Id, CaseInsensitive/Name,
    /// CaseInsensitive/other, StartsWith, Substring, Wildcard (Fuzzy is not part of the ordered
    /// ranking and sorts last).
    #[must_use]
    pub fn rank(&self) -> u8 {
        let field_rank = match self.field {
            PackageMatchField::Id => 0,
            PackageMatchField::Name => 1,
            _ => 2,
        };
        match self.match_type {
            MatchType::Exact => field_rank,
            MatchType::CaseInsensitive => 3 + field_rank,
            MatchType::StartsWith => 6,
            MatchType::Substring => 7,
            MatchType::Wildcard => 8,
            MatchType::Fuzzy => 9,
        }
    }
}

/// A request to search for packages across one or more sources.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchRequest {
    pub query: Option<PackageMatchFilter>,
    pub inclusions: Vec<PackageMatchFilter>,
    pub filters: Vec<PackageMatchFilter>,
    pub maximum_results: Option<usize>,
}

impl SearchRequest {
    /// Returns `true` if this request carries no query, inclusions, or filters: a request for
    /// every package a source can offer.
    #[must_use]
    pub fn is_for_everything(&self) -> bool {
        self.query.is_none() && self.inclusions.is_empty() && self.filters.is_empty()
    }
}

/// One matched package, together with the filter that matched it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchMatch<T> {
    pub package: T,
    pub filter: PackageMatchFilter,
}

/// The outcome of a search: matches in global rank order, and whether `maximum_results` truncated
/// the set.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchResult<T> {
    pub matches: Vec<SearchMatch<T>>,
    pub truncated: bool,
}

impl<T> SearchResult<T> {
    /// Sorts `matches` by [`PackageMatchFilter::rank`], stable so that source insertion order is
    /// preserved within a rank, then applies `maximum_results`.
    #[must_use]
    pub fn ordered(mut matches: Vec<SearchMatch<T>>, maximum_results: Option<usize>) -> Self {
        matches.sort_by_key(|candidate| candidate.filter.rank());

        let truncated = match maximum_results {
            Some(limit) if matches.len() > limit => {
                matches.truncate(limit);
                true
            }
            _ => false,
        };

        Self { matches, truncated }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(field: PackageMatchField, match_type: MatchType) -> PackageMatchFilter {
        PackageMatchFilter::new(field, match_type, "x")
    }

    #[test]
    fn exact_id_ranks_before_exact_name() {
        assert!(
            filter(PackageMatchField::Id, MatchType::Exact).rank()
                < filter(PackageMatchField::Name, MatchType::Exact).rank()
        );
    }

    #[test]
    fn exact_outranks_case_insensitive() {
        assert!(
            filter(PackageMatchField::Tag, MatchType::Exact).rank()
                < filter(PackageMatchField::Id, MatchType::CaseInsensitive).rank()
        );
    }

    #[test]
    fn empty_request_is_for_everything() {
        assert!(SearchRequest::default().is_for_everything());
    }

    #[test]
    fn truncation_respects_maximum_results() {
        let matches = vec![
            SearchMatch { package: "a", filter: filter(PackageMatchField::Id, MatchType::Exact) },
            SearchMatch { package: "b", filter: filter(PackageMatchField::Name, MatchType::Exact) },
            SearchMatch { package: "c", filter: filter(PackageMatchField::Tag, MatchType::Wildcard) },
        ];

        let result = SearchResult::ordered(matches, Some(2));
        assert!(result.truncated);
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].package, "a");
        assert_eq!(result.matches[1].package, "b");
    }
}
