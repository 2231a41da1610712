pub mod file_type;
pub mod resolution;
pub mod theme;

use url::Url;

use crate::{
    locale::icon::{file_type::IconFileType, resolution::IconResolution, theme::IconTheme},
    shared::Sha256String,
};

#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Icon {
    /// The url of the hosted icon file
    #[serde(rename = "IconUrl")]
    pub url: Url,
    /// The icon file type
    #[serde(rename = "IconFileType")]
    pub file_type: IconFileType,
    /// Optional icon resolution
    #[serde(rename = "IconResolution", skip_serializing_if = "Option::is_none")]
    pub resolution: Option<IconResolution>,
    /// Optional icon theme
    #[serde(rename = "IconTheme", skip_serializing_if = "Option::is_none")]
    pub theme: Option<IconTheme>,
    /// Optional Sha256 of the icon file
    #[serde(rename = "IconSha256", skip_serializing_if = "Option::is_none")]
    pub sha_256: Option<Sha256String>,
}
