//! The package source abstraction: backend details, the `Search` contract, and the aggregation
//! and persistence built on top of it.

pub mod composite;
pub mod memory;
pub mod package;
pub mod registry;
pub mod search;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use thiserror::Error;

use package::CatalogPackageVersion;
use search::{SearchRequest, SearchResult};

bitflags::bitflags! {
    /// Trust signals recorded for a source, internally represented as bit flags.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
    pub struct TrustLevel: u8 {
        const TRUSTED = 1;
        const STORE_ORIGIN = 1 << 1;
    }
}

/// Where a source's configuration came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SourceOrigin {
    Default,
    User,
    Predefined,
}

/// The persisted identity and bookkeeping for one source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceDetails {
    pub name: CompactString,
    pub identifier: CompactString,
    pub r#type: CompactString,
    pub arg: CompactString,
    pub data: CompactString,
    pub last_update_time: DateTime<Utc>,
    pub trust_level: TrustLevel,
    pub origin: SourceOrigin,
    pub is_tombstoned: bool,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("a source named {0:?} already exists")]
    DuplicateSourceName(CompactString),
    #[error("no source named {0:?} is configured")]
    UnknownSource(CompactString),
    #[error("could not acquire the lock for source {0:?}")]
    Locked(CompactString),
    #[error(transparent)]
    Lock(#[from] crate::util::lock::LockError),
    #[error(transparent)]
    Dom(#[from] crate::manifest::dom::DomError),
    #[error(transparent)]
    YamlSyntax(#[from] crate::manifest::dom::YamlSyntaxError),
    #[error(transparent)]
    Emit(#[from] crate::manifest::emit::InvalidEmitterState),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A backend exposing package data for one configured source.
pub trait Source {
    fn details(&self) -> &SourceDetails;

    /// `true` for a source that itself aggregates others (the composite source); always `false`
    /// for a leaf backend.
    fn is_composite(&self) -> bool {
        false
    }

    fn search(&self, request: &SearchRequest) -> SearchResult<CatalogPackageVersion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trust_level_combines_as_bitflags() {
        let level = TrustLevel::TRUSTED | TrustLevel::STORE_ORIGIN;
        assert!(level.contains(TrustLevel::TRUSTED));
        assert!(level.contains(TrustLevel::STORE_ORIGIN));
    }
}
