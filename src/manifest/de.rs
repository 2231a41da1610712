//! Bridges the manifest DOM ([`super::dom::Node`]) to `serde`, so every manifest struct already
//! expressed with `#[derive(serde::Deserialize)]` can be populated directly from a parsed node
//! without a second, hand-written population function per field.

use serde::de::{
    self, DeserializeSeed, EnumAccess, IntoDeserializer, MapAccess, SeqAccess, VariantAccess,
    Visitor,
};
use thiserror::Error;

use super::dom::{Mapping, Node, NodeKind, Scalar};

#[derive(Debug, Error)]
pub enum NodeDeserializeError {
    #[error("{0}")]
    Message(String),
    #[error("expected {expected}, found {found}")]
    UnexpectedKind { expected: &'static str, found: &'static str },
}

impl de::Error for NodeDeserializeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Message(msg.to_string())
    }
}

fn kind_name(node: &Node) -> &'static str {
    match &node.kind {
        NodeKind::Invalid => "invalid",
        NodeKind::Null => "null",
        NodeKind::Scalar(_) => "scalar",
        NodeKind::Sequence(_) => "sequence",
        NodeKind::Mapping(_) => "mapping",
    }
}

pub struct NodeDeserializer<'a>(pub &'a Node);

impl<'de> serde::Deserializer<'de> for NodeDeserializer<'_> {
    type Error = NodeDeserializeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match &self.0.kind {
            NodeKind::Null | NodeKind::Invalid => visitor.visit_unit(),
            NodeKind::Scalar(Scalar::Str(value)) => visitor.visit_str(value),
            NodeKind::Scalar(Scalar::Int(value)) => visitor.visit_i64(*value),
            NodeKind::Scalar(Scalar::Bool(value)) => visitor.visit_bool(*value),
            NodeKind::Scalar(Scalar::Null) => visitor.visit_unit(),
            NodeKind::Sequence(items) => visitor.visit_seq(SeqWalker { items, index: 0 }),
            NodeKind::Mapping(mapping) => {
                visitor.visit_map(MapWalker { mapping, pairs: mapping.iter(), value: None })
            }
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match &self.0.kind {
            NodeKind::Null | NodeKind::Invalid => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0.as_str() {
            Some(value) => visitor.visit_enum(value.into_deserializer()),
            None => Err(NodeDeserializeError::UnexpectedKind {
                expected: "scalar",
                found: kind_name(self.0),
            }),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqWalker<'a> {
    items: &'a [Node],
    index: usize,
}

impl<'de> SeqAccess<'de> for SeqWalker<'_> {
    type Error = NodeDeserializeError;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Self::Error> {
        let Some(item) = self.items.get(self.index) else {
            return Ok(None);
        };
        self.index += 1;
        seed.deserialize(NodeDeserializer(item)).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len().saturating_sub(self.index))
    }
}

struct MapWalker<'a, I: Iterator<Item = (&'a str, &'a Node)>> {
    mapping: &'a Mapping,
    pairs: I,
    value: Option<&'a Node>,
}

impl<'de, 'a, I: Iterator<Item = (&'a str, &'a Node)>> MapAccess<'de> for MapWalker<'a, I> {
    type Error = NodeDeserializeError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Self::Error> {
        let _ = self.mapping;
        match self.pairs.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(key.into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Self::Error> {
        let value = self.value.take().expect("next_value called before next_key");
        seed.deserialize(NodeDeserializer(value))
    }
}

impl<'de> EnumAccess<'de> for NodeDeserializer<'_> {
    type Error = NodeDeserializeError;
    type Variant = UnitOnly;

    fn variant_seed<V: DeserializeSeed<'de>>(
        self,
        seed: V,
    ) -> Result<(V::Value, Self::Variant), Self::Error> {
        let value = seed.deserialize(self)?;
        Ok((value, UnitOnly))
    }
}

pub struct UnitOnly;

impl<'de> VariantAccess<'de> for UnitOnly {
    type Error = NodeDeserializeError;

    fn unit_variant(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, _seed: T) -> Result<T::Value, Self::Error> {
        Err(de::Error::custom("newtype enum variants are not supported in manifest YAML"))
    }

    fn tuple_variant<V: Visitor<'de>>(self, _len: usize, _visitor: V) -> Result<V::Value, Self::Error> {
        Err(de::Error::custom("tuple enum variants are not supported in manifest YAML"))
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error> {
        Err(de::Error::custom("struct enum variants are not supported in manifest YAML"))
    }
}

/// Deserializes `T` from a parsed DOM node.
pub fn from_node<'de, T: serde::Deserialize<'de>>(node: &Node) -> Result<T, NodeDeserializeError> {
    T::deserialize(NodeDeserializer(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::dom::parse_documents;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Example {
        name: String,
        count: i64,
        enabled: Option<bool>,
        tags: Vec<String>,
    }

    #[test]
    fn deserializes_struct_from_mapping() {
        let docs = parse_documents("name: a\ncount: 3\ntags:\n  - x\n  - y\n").unwrap();
        let parsed: Example = from_node(&docs[0]).unwrap();
        assert_eq!(
            parsed,
            Example { name: "a".into(), count: 3, enabled: None, tags: vec!["x".into(), "y".into()] }
        );
    }
}
