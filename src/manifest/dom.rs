use std::fmt;

use thiserror::Error;
use yaml_rust2::{
    parser::{MarkedEventReceiver, Parser},
    scanner::{Marker, TScalarStyle},
    Event,
};

/// A source position, preserved through the DOM for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Mark {
    pub line: usize,
    pub column: usize,
}

impl From<Marker> for Mark {
    fn from(marker: Marker) -> Self {
        Self { line: marker.line(), column: marker.col() }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The resolved type of a scalar node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl Scalar {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

/// One node of the manifest YAML DOM.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Invalid,
    Null,
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Mapping(Mapping),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub mark: Mark,
}

impl Node {
    #[must_use]
    pub const fn invalid() -> Self {
        Self { kind: NodeKind::Invalid, mark: Mark { line: 0, column: 0 } }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self.kind, NodeKind::Invalid)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Scalar(scalar) => scalar.as_str(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match &self.kind {
            NodeKind::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum DomError {
    #[error("key `{0}` appears more than once in a single mapping")]
    DuplicateMappingKey(String),
}

/// An ordered multimap, preserving duplicate keys as they were written so that
/// [`Mapping::get`] can fail with [`DomError::DuplicateMappingKey`] instead of silently picking
/// one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Mapping {
    pairs: Vec<(String, Node)>,
}

impl Mapping {
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn push(&mut self, key: String, value: Node) {
        self.pairs.push((key, value));
    }

    /// Looks up `key`. Returns `Ok(None)` if absent, `Ok(Some(node))` if present exactly once, and
    /// `Err` if it appears more than once.
    pub fn get(&self, key: &str) -> Result<Option<&Node>, DomError> {
        let mut found = None;
        for (candidate, node) in &self.pairs {
            if candidate == key {
                if found.is_some() {
                    return Err(DomError::DuplicateMappingKey(key.to_owned()));
                }
                found = Some(node);
            }
        }
        Ok(found)
    }

    /// Looks up `key` case-insensitively, returning the canonical key as written alongside the
    /// node, without raising [`DomError::DuplicateMappingKey`] (case-insensitive lookup is used
    /// only to detect `FieldIsNotPascalCase`, not to read a value).
    #[must_use]
    pub fn get_case_insensitive(&self, key: &str) -> Option<(&str, &Node)> {
        self.pairs
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(candidate, node)| (candidate.as_str(), node))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum YamlSyntaxError {
    #[error("{message} at {mark}")]
    Scan { message: String, mark: Mark },
}

enum Container {
    Sequence(Vec<Node>, Mark),
    Mapping(Mapping, Option<String>, Mark),
}

/// Builds a [`Node`] tree from low-level parse events, mirroring the original `libyaml`-event-driven
/// DOM builder this design is based on.
#[derive(Default)]
struct Builder {
    documents: Vec<Node>,
    stack: Vec<Container>,
    current_root: Option<Node>,
}

impl Builder {
    fn resolve_plain_scalar(value: &str) -> Scalar {
        match value {
            "~" | "null" | "Null" | "NULL" => return Scalar::Null,
            "true" | "True" | "TRUE" => return Scalar::Bool(true),
            "false" | "False" | "FALSE" => return Scalar::Bool(false),
            _ => {}
        }
        if let Ok(parsed) = value.parse::<i64>() {
            return Scalar::Int(parsed);
        }
        Scalar::Str(value.to_owned())
    }

    fn push_node(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(Container::Sequence(items, _)) => items.push(node),
            Some(Container::Mapping(mapping, pending_key, _)) => {
                if let Some(key) = pending_key.take() {
                    mapping.push(key, node);
                } else {
                    let key = node.as_str().map(str::to_owned).unwrap_or_default();
                    *pending_key = Some(key);
                }
            }
            None => self.current_root = Some(node),
        }
    }
}

impl MarkedEventReceiver for Builder {
    fn on_event(&mut self, event: Event, marker: Marker) {
        let mark = Mark::from(marker);
        match event {
            Event::Scalar(value, style, _, _) => {
                let scalar = if style == TScalarStyle::Plain {
                    Self::resolve_plain_scalar(&value)
                } else {
                    Scalar::Str(value)
                };
                self.push_node(Node { kind: NodeKind::Scalar(scalar), mark });
            }
            Event::SequenceStart(..) => self.stack.push(Container::Sequence(Vec::new(), mark)),
            Event::SequenceEnd => {
                if let Some(Container::Sequence(items, mark)) = self.stack.pop() {
                    self.push_node(Node { kind: NodeKind::Sequence(items), mark });
                }
            }
            Event::MappingStart(..) => {
                self.stack.push(Container::Mapping(Mapping::new(), None, mark));
            }
            Event::MappingEnd => {
                if let Some(Container::Mapping(mapping, _, mark)) = self.stack.pop() {
                    self.push_node(Node { kind: NodeKind::Mapping(mapping), mark });
                }
            }
            Event::DocumentEnd => {
                if let Some(root) = self.current_root.take() {
                    self.documents.push(root);
                } else {
                    self.documents.push(Node { kind: NodeKind::Null, mark });
                }
            }
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::Alias(_) => {}
        }
    }
}

/// Parses `text` as one or more YAML documents, returning one [`Node`] per document in order.
pub fn parse_documents(text: &str) -> Result<Vec<Node>, YamlSyntaxError> {
    let mut parser = Parser::new_from_str(text);
    let mut builder = Builder::default();
    parser.load(&mut builder, true).map_err(|err| YamlSyntaxError::Scan {
        message: err.info().to_owned(),
        mark: Mark::from(*err.marker()),
    })?;
    Ok(builder.documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scalar_kinds() {
        let docs = parse_documents("Key: value\nCount: 42\nActive: true\nNothing: ~\n").unwrap();
        let mapping = docs[0].as_mapping().unwrap();
        assert_eq!(mapping.get("Key").unwrap().unwrap().as_str(), Some("value"));
        assert_eq!(
            mapping.get("Count").unwrap().unwrap().kind,
            NodeKind::Scalar(Scalar::Int(42))
        );
        assert_eq!(
            mapping.get("Active").unwrap().unwrap().kind,
            NodeKind::Scalar(Scalar::Bool(true))
        );
        assert_eq!(mapping.get("Nothing").unwrap().unwrap().kind, NodeKind::Scalar(Scalar::Null));
    }

    #[test]
    fn quoted_scalar_never_resolves_to_bool_or_int() {
        let docs = parse_documents("Key: \"42\"\n").unwrap();
        let mapping = docs[0].as_mapping().unwrap();
        assert_eq!(mapping.get("Key").unwrap().unwrap().as_str(), Some("42"));
    }

    #[test]
    fn duplicate_key_fails_lookup() {
        let docs = parse_documents("Key: a\nKey: b\n").unwrap();
        let mapping = docs[0].as_mapping().unwrap();
        assert_eq!(mapping.get("Key"), Err(DomError::DuplicateMappingKey("Key".to_owned())));
    }

    #[test]
    fn missing_key_is_none_not_invalid() {
        let docs = parse_documents("Key: a\n").unwrap();
        let mapping = docs[0].as_mapping().unwrap();
        assert_eq!(mapping.get("Missing").unwrap(), None);
    }

    #[test]
    fn multi_document_splits_on_document_markers() {
        let docs = parse_documents("A: 1\n---\nB: 2\n").unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn sequence_of_mappings() {
        let docs = parse_documents("Items:\n  - Name: a\n  - Name: b\n").unwrap();
        let mapping = docs[0].as_mapping().unwrap();
        let items = mapping.get("Items").unwrap().unwrap().as_sequence().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].as_mapping().unwrap().get("Name").unwrap().unwrap().as_str(),
            Some("a")
        );
    }
}
