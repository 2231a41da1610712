use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairBehavior {
    Modify,
    Uninstaller,
    Installer,
}

impl fmt::Display for RepairBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modify => f.write_str("Modify"),
            Self::Uninstaller => f.write_str("Uninstaller"),
            Self::Installer => f.write_str("Installer"),
        }
    }
}
