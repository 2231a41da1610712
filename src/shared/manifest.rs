use crate::shared::ManifestType;

/// A document that can appear as one physical YAML file within a multi-file manifest.
///
/// Each implementor corresponds to one [`ManifestType`] and therefore one JSON schema URL.
pub trait Manifest {
    const SCHEMA: &'static str;
    const TYPE: ManifestType;
}
