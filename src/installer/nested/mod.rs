pub mod installer_files;
pub mod installer_type;
mod portable_command_alias;

pub use portable_command_alias::{PortableCommandAlias, PortableCommandAliasError};
