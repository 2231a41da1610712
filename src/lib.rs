pub use icu_locale;
pub use sha2;
pub use shared::*;

pub mod arp;
pub mod cli;
pub mod installer;
pub mod locale;
pub mod manifest;
pub mod resolver;
mod shared;
pub mod source;
pub mod util;
pub mod version;

pub type Path = camino::Utf8PathBuf;
