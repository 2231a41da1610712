use super::portable_command_alias::PortableCommandAlias;
use crate::Path;

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NestedInstallerFiles {
    pub relative_file_path: Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portable_command_alias: Option<PortableCommandAlias>,
}
