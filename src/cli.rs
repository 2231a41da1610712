//! The seam a command-line front end (not built in this crate) calls into: a fixed exit-code
//! enumeration and a trait mapping each of this crate's error types onto one of them.

use crate::{arp::metadata::MetadataError, manifest::ManifestException, resolver::ResolveError, source::SourceError};

/// Mirrors the front end's fixed `APPINSTALLER_CLI_ERROR_*` exit-code space.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    ManifestFailed = 1,
    InstallDependencies = 2,
    SourceDataIntegrityFailure = 3,
    SourcesInvalid = 4,
    SourceNotSecure = 5,
    DependencyLoop = 6,
    Internal = 7,
}

/// Maps an error value onto the [`ExitCode`] a front end would surface for it.
pub trait ErrorExitCode {
    fn exit_code(&self) -> ExitCode;
}

impl ErrorExitCode for ManifestException {
    fn exit_code(&self) -> ExitCode {
        ExitCode::ManifestFailed
    }
}

impl ErrorExitCode for ResolveError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::FoundDependencyLoop(_) => ExitCode::DependencyLoop,
            Self::NoSuitableMinVersionDependency { .. } => ExitCode::InstallDependencies,
        }
    }
}

impl ErrorExitCode for SourceError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::DuplicateSourceName(_) | Self::UnknownSource(_) => ExitCode::SourcesInvalid,
            Self::Locked(_) | Self::Lock(_) => ExitCode::SourceDataIntegrityFailure,
            Self::Dom(_) | Self::YamlSyntax(_) | Self::Emit(_) | Self::Io(_) => {
                ExitCode::SourceDataIntegrityFailure
            }
        }
    }
}

impl ErrorExitCode for MetadataError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::NotValidState => ExitCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PackageIdentifier;

    #[test]
    fn dependency_loop_maps_to_its_own_exit_code() {
        let err = ResolveError::FoundDependencyLoop(vec![PackageIdentifier::new("Pub.App").unwrap()]);
        assert_eq!(err.exit_code(), ExitCode::DependencyLoop);
    }
}
