//! Canonical YAML emission: a streaming state machine with an allowed-event mask per state,
//! driving a textual writer from a [`Node`] tree.
//!
//! States: `BeginMap` (expects `Key` or `EndMap`), `Key` (the map has just read a field name and
//! now expects its value), `Value` (expects `Scalar`, `BeginMap`, or `BeginSeq`), `BeginSeq`
//! (expects `Scalar`, `BeginMap`, `BeginSeq`, or `EndSeq`). A container's state lives on a stack
//! so nested maps and sequences resume their parent's state correctly on `EndMap`/`EndSeq`.

use thiserror::Error;

use super::dom::{Mapping, Node, NodeKind, Scalar};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Frame {
    Map { expect_key: bool },
    Seq,
}

#[derive(Clone, Debug)]
enum Event {
    BeginMap,
    Key(String),
    Scalar(String),
    BeginSeq,
    EndSeq,
    EndMap,
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("emitter cannot accept {event} in its current state")]
pub struct InvalidEmitterState {
    event: &'static str,
}

struct Emitter {
    frames: Vec<Frame>,
    out: String,
    indent: usize,
    pending_inline: bool,
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::BeginMap => "BeginMap",
        Event::Key(_) => "Key",
        Event::Scalar(_) => "Scalar",
        Event::BeginSeq => "BeginSeq",
        Event::EndSeq => "EndSeq",
        Event::EndMap => "EndMap",
    }
}

impl Emitter {
    fn new() -> Self {
        Self { frames: Vec::new(), out: String::new(), indent: 0, pending_inline: false }
    }

    fn reject(event: &Event) -> InvalidEmitterState {
        InvalidEmitterState { event: event_name(event) }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
    }

    /// Begins a container (map or sequence) as whatever the current position expects: a fresh
    /// document root, a sequence item, or the value following a map key.
    fn enter_container(&mut self, as_seq_item: bool) {
        let _ = as_seq_item;
        match self.frames.last() {
            Some(Frame::Map { expect_key: false }) => {
                if self.pending_inline {
                    self.out.push('\n');
                    self.pending_inline = false;
                }
                self.indent += 1;
            }
            Some(Frame::Seq) => {
                self.write_indent();
                self.out.push_str("-\n");
                self.indent += 1;
            }
            _ => {}
        }
    }

    fn leave_container(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        if let Some(Frame::Map { expect_key }) = self.frames.last_mut() {
            *expect_key = true;
        }
    }

    fn emit(&mut self, event: Event) -> Result<(), InvalidEmitterState> {
        match (self.frames.last().copied(), &event) {
            (None, Event::Scalar(_) | Event::BeginMap | Event::BeginSeq) => {}
            (Some(Frame::Map { expect_key: true }), Event::Key(_) | Event::EndMap) => {}
            (
                Some(Frame::Map { expect_key: false }),
                Event::Scalar(_) | Event::BeginMap | Event::BeginSeq,
            ) => {}
            (
                Some(Frame::Seq),
                Event::Scalar(_) | Event::BeginMap | Event::BeginSeq | Event::EndSeq,
            ) => {}
            _ => return Err(Self::reject(&event)),
        }

        match event {
            Event::BeginMap => {
                self.enter_container(false);
                self.frames.push(Frame::Map { expect_key: true });
            }
            Event::Key(key) => {
                self.write_indent();
                self.out.push_str(&key);
                self.out.push(':');
                self.pending_inline = true;
                if let Some(Frame::Map { expect_key }) = self.frames.last_mut() {
                    *expect_key = false;
                }
            }
            Event::Scalar(value) => match self.frames.last() {
                Some(Frame::Map { .. }) => {
                    self.out.push(' ');
                    self.out.push_str(&value);
                    self.out.push('\n');
                    self.pending_inline = false;
                    if let Some(Frame::Map { expect_key }) = self.frames.last_mut() {
                        *expect_key = true;
                    }
                }
                Some(Frame::Seq) => {
                    self.write_indent();
                    self.out.push_str("- ");
                    self.out.push_str(&value);
                    self.out.push('\n');
                }
                None => {
                    self.out.push_str(&value);
                    self.out.push('\n');
                }
            },
            Event::BeginSeq => {
                self.enter_container(true);
                self.frames.push(Frame::Seq);
            }
            Event::EndSeq => {
                self.frames.pop();
                self.leave_container();
            }
            Event::EndMap => {
                self.frames.pop();
                self.leave_container();
            }
        }
        Ok(())
    }
}

fn walk(node: &Node, emitter: &mut Emitter) -> Result<(), InvalidEmitterState> {
    match &node.kind {
        NodeKind::Null | NodeKind::Invalid => emitter.emit(Event::Scalar("null".to_owned())),
        NodeKind::Scalar(scalar) => emitter.emit(Event::Scalar(render_scalar(scalar))),
        NodeKind::Sequence(items) => {
            emitter.emit(Event::BeginSeq)?;
            for item in items {
                walk(item, emitter)?;
            }
            emitter.emit(Event::EndSeq)
        }
        NodeKind::Mapping(mapping) => {
            emitter.emit(Event::BeginMap)?;
            for (key, value) in sorted_pairs(mapping) {
                emitter.emit(Event::Key(key.to_owned()))?;
                walk(value, emitter)?;
            }
            emitter.emit(Event::EndMap)
        }
    }
}

fn sorted_pairs(mapping: &Mapping) -> Vec<(&str, &Node)> {
    let mut pairs: Vec<_> = mapping.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
}

fn render_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Str(value) => value.clone(),
        Scalar::Int(value) => value.to_string(),
        Scalar::Bool(value) => value.to_string(),
        Scalar::Null => "null".to_owned(),
    }
}

/// Emits `node` as canonical block-style YAML: absent/empty values are expected to already be
/// excluded from the tree by the caller; mappings are emitted with keys sorted for determinism.
pub fn emit_node(node: &Node) -> Result<String, InvalidEmitterState> {
    let mut emitter = Emitter::new();
    walk(node, &mut emitter)?;
    Ok(emitter.out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::dom::parse_documents;

    #[test]
    fn round_trips_a_simple_mapping() {
        let docs = parse_documents("Key: value\nCount: 3\n").unwrap();
        let text = emit_node(&docs[0]).unwrap();
        let reparsed = parse_documents(&text).unwrap();
        assert_eq!(
            reparsed[0].as_mapping().unwrap().get("Key").unwrap().unwrap().as_str(),
            Some("value")
        );
    }

    #[test]
    fn emits_block_sequences() {
        let docs = parse_documents("Items:\n  - a\n  - b\n").unwrap();
        let text = emit_node(&docs[0]).unwrap();
        assert!(text.contains("- a"));
        assert!(text.contains("- b"));
    }

    #[test]
    fn round_trips_a_sequence_of_mappings() {
        let docs = parse_documents("Items:\n  - Name: a\n  - Name: b\n").unwrap();
        let text = emit_node(&docs[0]).unwrap();
        let reparsed = parse_documents(&text).unwrap();
        let items = reparsed[0].as_mapping().unwrap().get("Items").unwrap().unwrap();
        let items = items.as_sequence().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].as_mapping().unwrap().get("Name").unwrap().unwrap().as_str(),
            Some("a")
        );
    }

    #[test]
    fn rejects_key_without_enclosing_map() {
        let mut emitter = Emitter::new();
        let err = emitter.emit(Event::Key("X".to_owned())).unwrap_err();
        assert_eq!(err.event, "Key");
    }

    #[test]
    fn rejects_a_second_key_before_its_value_is_written() {
        let mut emitter = Emitter::new();
        emitter.emit(Event::BeginMap).unwrap();
        emitter.emit(Event::Key("A".to_owned())).unwrap();
        let err = emitter.emit(Event::Key("B".to_owned())).unwrap_err();
        assert_eq!(err.event, "Key");
    }
}
