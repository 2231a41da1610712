//! Dependency resolution: a depth-first walk over declared `PackageDependencies`, producing a
//! dependency-first install plan.

use std::collections::HashSet;

use thiserror::Error;

use crate::{installer::PackageDependencies, PackageIdentifier, PackageVersion};

/// One package the resolver determined must be installed, and the version chosen for it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageToInstall {
    pub package_identifier: PackageIdentifier,
    pub version: PackageVersion,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ResolveError {
    #[error("dependency loop detected: {}", cycle_path(.0))]
    FoundDependencyLoop(Vec<PackageIdentifier>),
    #[error("no version of {identifier} satisfies minimum version {min_version}")]
    NoSuitableMinVersionDependency { identifier: PackageIdentifier, min_version: PackageVersion },
}

fn cycle_path(path: &[PackageIdentifier]) -> String {
    path.iter().map(PackageIdentifier::as_str).collect::<Vec<_>>().join(" -> ")
}

/// A catalog the resolver can query for a dependency's available versions and install state.
///
/// Implemented by the composite source in production; an in-memory double is enough for tests.
pub trait DependencySource {
    /// Returns `true` if `id` is already installed, at a version satisfying `min_version` if one
    /// is given.
    fn is_installed(&self, id: &PackageIdentifier, min_version: Option<&PackageVersion>) -> bool;

    /// Returns the lowest available version of `id` that satisfies `min_version` (or the lowest
    /// available version at all, if `min_version` is `None`), along with that version's declared
    /// dependencies. `None` if no version satisfies the constraint.
    fn resolve_version(
        &self,
        id: &PackageIdentifier,
        min_version: Option<&PackageVersion>,
    ) -> Option<(PackageVersion, Vec<PackageDependencies>)>;
}

/// Resolves `root_dependencies` against `source`, returning a dependency-first, loop-free install
/// plan. Packages already installed (and satisfying their required minimum version) are omitted.
pub fn resolve(
    root_dependencies: &[PackageDependencies],
    source: &dyn DependencySource,
) -> Result<Vec<PackageToInstall>, ResolveError> {
    let mut active_stack = Vec::new();
    let mut emitted = Vec::new();
    let mut emitted_ids = HashSet::new();

    for dependency in root_dependencies {
        visit(
            &dependency.package_identifier,
            dependency.minimum_version.as_ref(),
            source,
            &mut active_stack,
            &mut emitted,
            &mut emitted_ids,
        )?;
    }

    Ok(emitted)
}

fn visit(
    id: &PackageIdentifier,
    min_version: Option<&PackageVersion>,
    source: &dyn DependencySource,
    active_stack: &mut Vec<PackageIdentifier>,
    emitted: &mut Vec<PackageToInstall>,
    emitted_ids: &mut HashSet<PackageIdentifier>,
) -> Result<(), ResolveError> {
    if source.is_installed(id, min_version) {
        return Ok(());
    }

    if let Some(position) = active_stack.iter().position(|active| active == id) {
        let mut cycle = active_stack[position..].to_vec();
        cycle.push(id.clone());
        return Err(ResolveError::FoundDependencyLoop(cycle));
    }

    let Some((version, dependencies)) = source.resolve_version(id, min_version) else {
        return Err(ResolveError::NoSuitableMinVersionDependency {
            identifier: id.clone(),
            min_version: min_version.cloned().unwrap_or_default(),
        });
    };

    active_stack.push(id.clone());
    for dependency in &dependencies {
        visit(
            &dependency.package_identifier,
            dependency.minimum_version.as_ref(),
            source,
            active_stack,
            emitted,
            emitted_ids,
        )?;
    }
    active_stack.pop();

    if emitted_ids.insert(id.clone()) {
        emitted.push(PackageToInstall { package_identifier: id.clone(), version });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct InMemorySource {
        catalog: HashMap<String, Vec<(PackageVersion, Vec<PackageDependencies>)>>,
        installed: HashSet<String>,
    }

    impl InMemorySource {
        fn new() -> Self {
            Self { catalog: HashMap::new(), installed: HashSet::new() }
        }

        fn with_version(
            mut self,
            id: &str,
            version: &str,
            dependencies: Vec<PackageDependencies>,
        ) -> Self {
            self.catalog
                .entry(id.to_owned())
                .or_default()
                .push((version.parse().unwrap(), dependencies));
            self
        }

        fn installed(mut self, id: &str) -> Self {
            self.installed.insert(id.to_owned());
            self
        }
    }

    impl DependencySource for InMemorySource {
        fn is_installed(&self, id: &PackageIdentifier, _min_version: Option<&PackageVersion>) -> bool {
            self.installed.contains(id.as_str())
        }

        fn resolve_version(
            &self,
            id: &PackageIdentifier,
            min_version: Option<&PackageVersion>,
        ) -> Option<(PackageVersion, Vec<PackageDependencies>)> {
            let mut versions = self.catalog.get(id.as_str())?.clone();
            versions.sort_by(|a, b| a.0.cmp(&b.0));
            versions.into_iter().find(|(version, _)| match min_version {
                Some(min) => version >= min,
                None => true,
            })
        }
    }

    fn dep(id: &str) -> PackageDependencies {
        PackageDependencies::new(PackageIdentifier::new(id).unwrap())
    }

    fn dep_with_min(id: &str, min_version: &str) -> PackageDependencies {
        PackageDependencies::new_with_min_version(
            PackageIdentifier::new(id).unwrap(),
            min_version.parse().unwrap(),
        )
    }

    fn ids(plan: &[PackageToInstall]) -> Vec<String> {
        plan.iter().map(|entry| entry.package_identifier.as_str().to_owned()).collect()
    }

    #[test]
    fn installs_transitive_dependency_before_its_dependent() {
        let source = InMemorySource::new()
            .with_version("Pub.B", "1.0.0", vec![])
            .with_version("Pub.C", "1.0.0", vec![dep("Pub.B")]);
        let root = vec![dep("Pub.B"), dep("Pub.C")];

        let plan = resolve(&root, &source).unwrap();
        assert_eq!(ids(&plan), vec!["Pub.B", "Pub.C"]);
    }

    #[test]
    fn diamond_shaped_graph_with_a_shared_path_is_not_a_loop() {
        // C -> B, H -> {G, B}, G -> C
        let source = InMemorySource::new()
            .with_version("Pub.B", "1.0.0", vec![])
            .with_version("Pub.C", "1.0.0", vec![dep("Pub.B")])
            .with_version("Pub.G", "1.0.0", vec![dep("Pub.C")])
            .with_version("Pub.H", "1.0.0", vec![dep("Pub.G"), dep("Pub.B")]);
        let root = vec![dep("Pub.C"), dep("Pub.H")];

        let plan = resolve(&root, &source).unwrap();
        assert_eq!(ids(&plan), vec!["Pub.B", "Pub.C", "Pub.G", "Pub.H"]);
    }

    #[test]
    fn already_installed_dependency_is_skipped() {
        let source = InMemorySource::new()
            .with_version("Pub.Installed1", "1.0.0", vec![])
            .installed("Pub.Installed1");
        let root = vec![dep("Pub.Installed1")];

        let plan = resolve(&root, &source).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn picks_the_lowest_version_satisfying_the_minimum() {
        let source = InMemorySource::new()
            .with_version("Pub.MinVersion", "1.0", vec![])
            .with_version("Pub.MinVersion", "1.5", vec![]);
        let root = vec![dep_with_min("Pub.MinVersion", "1.0")];

        let plan = resolve(&root, &source).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].package_identifier.as_str(), "Pub.MinVersion");
        assert_eq!(plan[0].version, "1.0".parse().unwrap());
    }

    #[test]
    fn a_true_cycle_is_reported_as_a_loop() {
        let source = InMemorySource::new()
            .with_version("Pub.X", "1.0.0", vec![dep("Pub.Y")])
            .with_version("Pub.Y", "1.0.0", vec![dep("Pub.X")]);
        let root = vec![dep("Pub.X")];

        let err = resolve(&root, &source).unwrap_err();
        assert!(matches!(err, ResolveError::FoundDependencyLoop(_)));
    }

    #[test]
    fn missing_minimum_version_is_reported() {
        let source = InMemorySource::new().with_version("Pub.Old", "1.0.0", vec![]);
        let root = vec![dep_with_min("Pub.Old", "2.0.0")];

        let err = resolve(&root, &source).unwrap_err();
        assert!(matches!(err, ResolveError::NoSuitableMinVersionDependency { .. }));
    }
}
