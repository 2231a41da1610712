use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use compact_str::CompactString;

use super::switch::{InstallerSwitch, SwitchError};

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct LogSwitch(InstallerSwitch<512>);

impl LogSwitch {
    pub const MAX_CHAR_LENGTH: usize = 512;

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<CompactString> {
        self.0.iter()
    }
}

impl Deref for LogSwitch {
    type Target = InstallerSwitch<512>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LogSwitch {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for LogSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LogSwitch {
    type Err = SwitchError<512>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstallerSwitch::<512>::from_str(s).map(Self)
    }
}

impl IntoIterator for LogSwitch {
    type Item = CompactString;

    type IntoIter = smallvec::IntoIter<[CompactString; 2]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'switch> IntoIterator for &'switch LogSwitch {
    type Item = &'switch CompactString;

    type IntoIter = std::slice::Iter<'switch, CompactString>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
