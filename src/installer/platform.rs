use std::fmt;

use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// The Windows platforms targeted by an installer, internally represented as bit flags.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
    pub struct Platform: u8 {
        const DESKTOP = 1;
        const UNIVERSAL = 1 << 1;
    }
}

const DESKTOP: &str = "Windows.Desktop";
const UNIVERSAL: &str = "Windows.Universal";

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DESKTOP => f.write_str(DESKTOP),
            Self::UNIVERSAL => f.write_str(UNIVERSAL),
            _ => bitflags::parser::to_writer(self, f),
        }
    }
}

impl serde::Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.iter().count()))?;
        for platform in self.iter() {
            match platform {
                Self::DESKTOP => seq.serialize_element(DESKTOP)?,
                Self::UNIVERSAL => seq.serialize_element(UNIVERSAL)?,
                _ => {}
            }
        }
        seq.end()
    }
}

impl<'de> serde::Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PlatformVisitor;

        impl<'de> serde::de::Visitor<'de> for PlatformVisitor {
            type Value = Platform;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of platform strings")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
            where
                V: serde::de::SeqAccess<'de>,
            {
                let mut platforms = Platform::empty();

                while let Some(value) = seq.next_element::<&str>()? {
                    match value {
                        DESKTOP => platforms |= Platform::DESKTOP,
                        UNIVERSAL => platforms |= Platform::UNIVERSAL,
                        _ => {
                            return Err(serde::de::Error::unknown_variant(
                                value,
                                &[DESKTOP, UNIVERSAL],
                            ));
                        }
                    }
                }

                Ok(platforms)
            }
        }

        deserializer.deserialize_seq(PlatformVisitor)
    }
}

#[derive(Error, Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[error("Failed to parse as valid Platform")]
pub struct PlatformParseError;

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::Platform;

    #[rstest]
    #[case(
        Platform::all(),
        indoc! {"
            - Windows.Desktop
            - Windows.Universal
        "}
    )]
    #[case(
        Platform::empty(),
        indoc! {"
            []
        "}
    )]
    #[case(
        Platform::DESKTOP,
        indoc! {"
            - Windows.Desktop
        "}
    )]
    fn serialize_platform(#[case] platforms: Platform, #[case] expected: &str) {
        assert_eq!(serde_yaml::to_string(&platforms).unwrap(), expected);
    }

    #[rstest]
    #[case(
        indoc! {"
            - Windows.Desktop
            - Windows.Universal
        "},
        Platform::all(),
    )]
    #[case(
        indoc! {"
            []
        "},
        Platform::empty()
    )]
    fn deserialize_platform(#[case] input: &str, #[case] expected: Platform) {
        assert_eq!(serde_yaml::from_str::<Platform>(input).unwrap(), expected);
    }
}
