use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Architectures a package is known not to be compatible with, internally represented as bit
    /// flags.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
    pub struct UnsupportedOSArchitecture: u8 {
        const X86 = 1;
        const X64 = 1 << 1;
        const ARM = 1 << 2;
        const ARM64 = 1 << 3;
    }
}

const X86: &str = "x86";
const X64: &str = "x64";
const ARM: &str = "arm";
const ARM64: &str = "arm64";

impl fmt::Display for UnsupportedOSArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::X86 => f.write_str(X86),
            Self::X64 => f.write_str(X64),
            Self::ARM => f.write_str(ARM),
            Self::ARM64 => f.write_str(ARM64),
            _ => bitflags::parser::to_writer(self, f),
        }
    }
}

impl serde::Serialize for UnsupportedOSArchitecture {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.iter().count()))?;
        for architecture in self.iter() {
            match architecture {
                Self::X86 => seq.serialize_element(X86)?,
                Self::X64 => seq.serialize_element(X64)?,
                Self::ARM => seq.serialize_element(ARM)?,
                Self::ARM64 => seq.serialize_element(ARM64)?,
                _ => {}
            }
        }
        seq.end()
    }
}

impl<'de> serde::Deserialize<'de> for UnsupportedOSArchitecture {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct UnsupportedOSArchitectureVisitor;

        impl<'de> serde::de::Visitor<'de> for UnsupportedOSArchitectureVisitor {
            type Value = UnsupportedOSArchitecture;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of architecture strings")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
            where
                V: serde::de::SeqAccess<'de>,
            {
                let mut architectures = UnsupportedOSArchitecture::empty();

                while let Some(value) = seq.next_element::<&str>()? {
                    match value {
                        X86 => architectures |= UnsupportedOSArchitecture::X86,
                        X64 => architectures |= UnsupportedOSArchitecture::X64,
                        ARM => architectures |= UnsupportedOSArchitecture::ARM,
                        ARM64 => architectures |= UnsupportedOSArchitecture::ARM64,
                        _ => {
                            return Err(serde::de::Error::unknown_variant(
                                value,
                                &[X86, X64, ARM, ARM64],
                            ));
                        }
                    }
                }

                Ok(architectures)
            }
        }

        deserializer.deserialize_seq(UnsupportedOSArchitectureVisitor)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::UnsupportedOSArchitecture;

    #[rstest]
    #[case(
        UnsupportedOSArchitecture::all(),
        indoc! {"
            - x86
            - x64
            - arm
            - arm64
        "}
    )]
    #[case(
        UnsupportedOSArchitecture::empty(),
        indoc! {"
            []
        "}
    )]
    #[case(
        UnsupportedOSArchitecture::ARM | UnsupportedOSArchitecture::ARM64,
        indoc! {"
            - arm
            - arm64
        "}
    )]
    fn serialize_unsupported_os_architecture(
        #[case] architectures: UnsupportedOSArchitecture,
        #[case] expected: &str,
    ) {
        assert_eq!(serde_yaml::to_string(&architectures).unwrap(), expected);
    }

    #[rstest]
    #[case(
        indoc! {"
            - x86
            - x64
            - arm
            - arm64
        "},
        UnsupportedOSArchitecture::all(),
    )]
    #[case(
        indoc! {"
            []
        "},
        UnsupportedOSArchitecture::empty()
    )]
    fn deserialize_unsupported_os_architecture(
        #[case] input: &str,
        #[case] expected: UnsupportedOSArchitecture,
    ) {
        assert_eq!(
            serde_yaml::from_str::<UnsupportedOSArchitecture>(input).unwrap(),
            expected
        );
    }
}
