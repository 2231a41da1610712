//! Persists configured sources as YAML, guarded by a per-source cross-process lock, mirroring the
//! `UserSources`/`SourcesMetadata` pair the spec describes.

use std::{fs, path::PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use compact_str::CompactString;

use crate::{
    manifest::{
        dom::{Mapping, Mark, Node, NodeKind, Scalar},
        emit::emit_node,
        parser::decode_and_parse_single_document,
    },
    util::lock::NamedLock,
};

use super::{SourceDetails, SourceError, SourceOrigin, TrustLevel};

fn scalar_node(value: impl Into<String>) -> Node {
    Node { kind: NodeKind::Scalar(Scalar::Str(value.into())), mark: Mark::default() }
}

fn bool_node(value: bool) -> Node {
    Node { kind: NodeKind::Scalar(Scalar::Bool(value)), mark: Mark::default() }
}

fn int_node(value: i64) -> Node {
    Node { kind: NodeKind::Scalar(Scalar::Int(value)), mark: Mark::default() }
}

fn source_details_to_node(details: &SourceDetails) -> Node {
    let mut mapping = Mapping::new();
    mapping.push("Name".to_owned(), scalar_node(details.name.as_str()));
    mapping.push("Type".to_owned(), scalar_node(details.r#type.as_str()));
    mapping.push("Arg".to_owned(), scalar_node(details.arg.as_str()));
    mapping.push("Data".to_owned(), scalar_node(details.data.as_str()));
    mapping.push("Identifier".to_owned(), scalar_node(details.identifier.as_str()));
    mapping.push("IsTombstone".to_owned(), bool_node(details.is_tombstoned));
    mapping.push("TrustLevel".to_owned(), int_node(i64::from(details.trust_level.bits())));
    mapping.push(
        "Origin".to_owned(),
        scalar_node(match details.origin {
            SourceOrigin::Default => "default",
            SourceOrigin::User => "user",
            SourceOrigin::Predefined => "predefined",
        }),
    );
    Node { kind: NodeKind::Mapping(mapping), mark: Mark::default() }
}

fn node_to_source_details(node: &Node, last_update_time: DateTime<Utc>) -> Option<SourceDetails> {
    let mapping = node.as_mapping()?;
    let name = mapping.get("Name").ok()??.as_str()?.to_owned();
    let r#type = mapping.get("Type").ok()??.as_str()?.to_owned();
    let arg = mapping.get("Arg").ok()?.and_then(Node::as_str).unwrap_or_default().to_owned();
    let data = mapping.get("Data").ok()?.and_then(Node::as_str).unwrap_or_default().to_owned();
    let identifier = mapping.get("Identifier").ok()?.and_then(Node::as_str).unwrap_or(&name).to_owned();
    let is_tombstoned = matches!(
        mapping.get("IsTombstone").ok()?.map(|node| &node.kind),
        Some(NodeKind::Scalar(Scalar::Bool(true)))
    );
    let trust_level = match mapping.get("TrustLevel").ok()?.map(|node| &node.kind) {
        Some(NodeKind::Scalar(Scalar::Int(bits))) => TrustLevel::from_bits_truncate(*bits as u8),
        _ => TrustLevel::empty(),
    };
    let origin = match mapping.get("Origin").ok()?.and_then(Node::as_str) {
        Some("default") => SourceOrigin::Default,
        Some("predefined") => SourceOrigin::Predefined,
        _ => SourceOrigin::User,
    };

    Some(SourceDetails {
        name: CompactString::from(name),
        identifier: CompactString::from(identifier),
        r#type: CompactString::from(r#type),
        arg: CompactString::from(arg),
        data: CompactString::from(data),
        last_update_time,
        trust_level,
        origin,
        is_tombstoned,
    })
}

/// The persisted set of configured sources, backed by a `Sources:` document and a parallel
/// `SourcesMetadata` document under the same directory.
pub struct SourceRegistry {
    directory: PathBuf,
    sources: Vec<SourceDetails>,
}

impl SourceRegistry {
    fn sources_path(directory: &std::path::Path) -> PathBuf {
        directory.join("UserSources.yaml")
    }

    fn metadata_path(directory: &std::path::Path) -> PathBuf {
        directory.join("SourcesMetadata.yaml")
    }

    fn lock_path(directory: &std::path::Path) -> PathBuf {
        directory.join(".sources.lock")
    }

    /// Loads the registry from `directory`, or starts empty if no `UserSources.yaml` exists yet.
    pub fn load(directory: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let directory = directory.into();
        let sources_path = Self::sources_path(&directory);
        let metadata_path = Self::metadata_path(&directory);

        if !sources_path.exists() {
            return Ok(Self { directory, sources: Vec::new() });
        }

        let sources_text = fs::read_to_string(&sources_path)?;
        let sources_root = decode_and_parse_single_document(sources_text.as_bytes())?;
        let sources_list = sources_root
            .as_mapping()
            .and_then(|mapping| mapping.get("Sources").ok().flatten())
            .and_then(Node::as_sequence)
            .unwrap_or_default();

        let mut last_updates = std::collections::HashMap::new();
        if metadata_path.exists() {
            let metadata_text = fs::read_to_string(&metadata_path)?;
            let metadata_root = decode_and_parse_single_document(metadata_text.as_bytes())?;
            if let Some(entries) = metadata_root
                .as_mapping()
                .and_then(|mapping| mapping.get("Sources").ok().flatten())
                .and_then(Node::as_sequence)
            {
                for entry in entries {
                    if let Some(mapping) = entry.as_mapping() {
                        let name = mapping.get("Name").ok().flatten().and_then(Node::as_str);
                        let last_update = mapping
                            .get("LastUpdate")
                            .ok()
                            .flatten()
                            .and_then(|node| match &node.kind {
                                NodeKind::Scalar(Scalar::Int(seconds)) => Some(*seconds),
                                _ => None,
                            });
                        if let (Some(name), Some(seconds)) = (name, last_update) {
                            last_updates.insert(name.to_owned(), seconds);
                        }
                    }
                }
            }
        }

        let sources = sources_list
            .iter()
            .filter_map(|node| {
                let name = node.as_mapping().and_then(|mapping| mapping.get("Name").ok().flatten())
                    .and_then(Node::as_str)?;
                let last_update_time = last_updates
                    .get(name)
                    .and_then(|seconds| Utc.timestamp_opt(*seconds, 0).single())
                    .unwrap_or_else(Utc::now);
                node_to_source_details(node, last_update_time)
            })
            .collect();

        Ok(Self { directory, sources })
    }

    /// Rewrites both YAML documents under an exclusive lock, via write-temp-then-rename.
    fn save(&self) -> Result<(), SourceError> {
        let mut lock = NamedLock::open(&Self::lock_path(&self.directory))?;
        let _guard = lock.write()?;

        let mut sources_list = Vec::new();
        let mut metadata_list = Vec::new();
        for source in &self.sources {
            sources_list.push(source_details_to_node(source));

            let mut metadata_entry = Mapping::new();
            metadata_entry.push("Name".to_owned(), scalar_node(source.name.as_str()));
            metadata_entry.push("LastUpdate".to_owned(), int_node(source.last_update_time.timestamp()));
            metadata_list.push(Node { kind: NodeKind::Mapping(metadata_entry), mark: Mark::default() });
        }

        let mut sources_root = Mapping::new();
        sources_root.push(
            "Sources".to_owned(),
            Node { kind: NodeKind::Sequence(sources_list), mark: Mark::default() },
        );
        let sources_node = Node { kind: NodeKind::Mapping(sources_root), mark: Mark::default() };

        let mut metadata_root = Mapping::new();
        metadata_root.push(
            "Sources".to_owned(),
            Node { kind: NodeKind::Sequence(metadata_list), mark: Mark::default() },
        );
        let metadata_node = Node { kind: NodeKind::Mapping(metadata_root), mark: Mark::default() };

        write_atomically(&Self::sources_path(&self.directory), &emit_node(&sources_node)?)?;
        write_atomically(&Self::metadata_path(&self.directory), &emit_node(&metadata_node)?)?;

        Ok(())
    }

    #[must_use]
    pub fn sources(&self) -> &[SourceDetails] {
        &self.sources
    }

    pub fn add(&mut self, name: &str, r#type: &str, arg: &str) -> Result<(), SourceError> {
        if self.sources.iter().any(|source| source.name == name) {
            return Err(SourceError::DuplicateSourceName(name.into()));
        }

        self.sources.push(SourceDetails {
            name: name.into(),
            identifier: name.into(),
            r#type: r#type.into(),
            arg: arg.into(),
            data: CompactString::default(),
            last_update_time: Utc::now(),
            trust_level: TrustLevel::empty(),
            origin: SourceOrigin::User,
            is_tombstoned: false,
        });
        self.save()
    }

    /// Refreshes a source's `last_update_time`. A background update (`background = true`) takes
    /// the lock without blocking and fails with [`SourceError::Locked`] if contended; a foreground
    /// update waits for it.
    pub fn update(&mut self, name: &str, background: bool) -> Result<(), SourceError> {
        if background {
            let mut probe = NamedLock::open(&Self::lock_path(&self.directory))?;
            probe.try_write().map_err(|_| SourceError::Locked(name.into()))?;
        }

        let source = self
            .sources
            .iter_mut()
            .find(|source| source.name == name)
            .ok_or_else(|| SourceError::UnknownSource(name.into()))?;
        source.last_update_time = Utc::now();
        self.save()
    }

    /// Removes a user source outright; a default source is tombstoned instead of deleted.
    pub fn remove(&mut self, name: &str) -> Result<(), SourceError> {
        let source =
            self.sources.iter_mut().find(|source| source.name == name).ok_or_else(|| SourceError::UnknownSource(name.into()))?;

        if source.origin == SourceOrigin::Default {
            source.is_tombstoned = true;
        } else {
            self.sources.retain(|source| source.name != name);
        }
        self.save()
    }

    /// Purges a named source (or all sources, when `name` is `None`) from the persisted set,
    /// ignoring tombstone status.
    pub fn drop_source(&mut self, name: Option<&str>) -> Result<(), SourceError> {
        match name {
            Some(name) => self.sources.retain(|source| source.name != name),
            None => self.sources.clear(),
        }
        self.save()
    }

    pub fn open(&self, name: &str) -> Result<&SourceDetails, SourceError> {
        self.sources.iter().find(|source| source.name == name).ok_or_else(|| SourceError::UnknownSource(name.into()))
    }
}

fn write_atomically(path: &std::path::Path, contents: &str) -> Result<(), SourceError> {
    let temp_path = path.with_extension("yaml.tmp");
    fs::write(&temp_path, contents)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn add_then_load_round_trips_a_source() {
        let dir = tempdir().unwrap();

        let mut registry = SourceRegistry::load(dir.path()).unwrap();
        registry.add("winget", "Microsoft.PreIndexed.Package", "https://example.com/source").unwrap();

        let reloaded = SourceRegistry::load(dir.path()).unwrap();
        assert_eq!(reloaded.sources().len(), 1);
        assert_eq!(reloaded.sources()[0].name, "winget");
        assert_eq!(reloaded.sources()[0].arg, "https://example.com/source");
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let dir = tempdir().unwrap();
        let mut registry = SourceRegistry::load(dir.path()).unwrap();
        registry.add("winget", "type", "arg").unwrap();

        let err = registry.add("winget", "type", "arg").unwrap_err();
        assert!(matches!(err, SourceError::DuplicateSourceName(_)));
    }

    #[test]
    fn removing_a_default_source_tombstones_it_instead_of_deleting() {
        let dir = tempdir().unwrap();
        let mut registry = SourceRegistry::load(dir.path()).unwrap();
        registry.add("winget", "type", "arg").unwrap();
        registry.sources[0].origin = SourceOrigin::Default;
        registry.save().unwrap();

        registry.remove("winget").unwrap();
        assert_eq!(registry.sources().len(), 1);
        assert!(registry.sources()[0].is_tombstoned);
    }
}
