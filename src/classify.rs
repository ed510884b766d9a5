//! Maps changed paths onto the project registry.

use regex::Regex;

use crate::registry::ProjectRegistry;

/// Paths that invalidate every tracked project when touched: the
/// top-level Makefile, this orchestrator's own source tree, and the
/// release tooling.
const GLOBAL_TRIGGER_PATTERN: &str = "Makefile|tools/postsubmit/.*|release/.*";

/// Detects changes to shared build infrastructure.
///
/// The pattern is compiled once per run and tested against every changed
/// path; a single match forces a full rebuild of all tracked projects.
pub struct GlobalTriggerRule {
    pattern: Regex,
}

impl GlobalTriggerRule {
    /// The standard rule covering the build-control file, the orchestrator
    /// source, and the release tooling tree.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in pattern is invalid, which cannot happen
    /// for the literal above.
    #[must_use]
    pub fn standard() -> Self {
        Self { pattern: Regex::new(GLOBAL_TRIGGER_PATTERN).expect("valid trigger pattern") }
    }

    /// Whether the changed path references shared build infrastructure.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

/// The outcome of classification: which projects to rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Shared build infrastructure changed; rebuild every tracked project.
    All,
    /// Rebuild only these projects, in registry order. May be empty.
    Subset(Vec<String>),
}

impl Selection {
    /// Resolves the selection against the registry into an ordered list
    /// of project identifiers to build.
    #[must_use]
    pub fn projects<'a>(&'a self, registry: &'a ProjectRegistry) -> &'a [String] {
        match self {
            Selection::All => registry.identifiers(),
            Selection::Subset(identifiers) => identifiers,
        }
    }
}

/// Classifies changed paths into a [`Selection`].
///
/// A project is selected when any changed path contains its identifier as
/// a substring. Matching is deliberately coarse: a path containing the
/// identifier anywhere counts, not merely under a directory prefix, so
/// the system over-builds rather than leaving a vendored project stale.
/// Any path matching the global trigger selects every project.
#[must_use]
pub fn classify(
    changed_paths: &[String],
    registry: &ProjectRegistry,
    trigger: &GlobalTriggerRule,
) -> Selection {
    if changed_paths.iter().any(|path| trigger.matches(path)) {
        return Selection::All;
    }
    let selected = registry
        .identifiers()
        .iter()
        .filter(|identifier| changed_paths.iter().any(|path| path.contains(identifier.as_str())))
        .cloned()
        .collect();
    Selection::Subset(selected)
}

#[cfg(test)]
mod tests {
    use super::{classify, GlobalTriggerRule, Selection};
    use crate::registry::ProjectRegistry;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn selects_project_referenced_by_changed_path() {
        let registry = ProjectRegistry::new(["kubernetes/kubernetes", "coredns/coredns"]);
        let changed = paths(&["vendor/kubernetes/kubernetes/README.md", "docs/notes.md"]);
        let selection = classify(&changed, &registry, &GlobalTriggerRule::standard());
        assert_eq!(selection, Selection::Subset(vec!["kubernetes/kubernetes".into()]));
    }

    #[test]
    fn substring_match_anywhere_in_path_counts() {
        let registry = ProjectRegistry::new(["coredns/coredns"]);
        let changed = paths(&["nested/vendoring/coredns/coredns/plugin/cache/cache.go"]);
        let selection = classify(&changed, &registry, &GlobalTriggerRule::standard());
        assert_eq!(selection, Selection::Subset(vec!["coredns/coredns".into()]));
    }

    #[test]
    fn unrelated_changes_select_nothing() {
        let registry = ProjectRegistry::standard();
        let changed = paths(&["docs/notes.md", "OWNERS"]);
        let selection = classify(&changed, &registry, &GlobalTriggerRule::standard());
        assert_eq!(selection, Selection::Subset(vec![]));
    }

    #[test]
    fn empty_input_selects_nothing() {
        let registry = ProjectRegistry::standard();
        let selection = classify(&[], &registry, &GlobalTriggerRule::standard());
        assert_eq!(selection, Selection::Subset(vec![]));
        assert!(selection.projects(&registry).is_empty());
    }

    #[test]
    fn makefile_change_selects_everything() {
        let registry = ProjectRegistry::standard();
        let changed = paths(&["Makefile"]);
        let selection = classify(&changed, &registry, &GlobalTriggerRule::standard());
        assert_eq!(selection, Selection::All);
        assert_eq!(selection.projects(&registry).len(), 13);
    }

    #[test]
    fn release_tooling_change_selects_everything() {
        let registry = ProjectRegistry::new(["coredns/coredns"]);
        let changed = paths(&["docs/notes.md", "release/pipelines/build.yaml"]);
        let selection = classify(&changed, &registry, &GlobalTriggerRule::standard());
        assert_eq!(selection, Selection::All);
    }

    #[test]
    fn orchestrator_source_change_selects_everything() {
        let registry = ProjectRegistry::standard();
        let changed = paths(&["tools/postsubmit/src/classify.rs"]);
        let selection = classify(&changed, &registry, &GlobalTriggerRule::standard());
        assert_eq!(selection, Selection::All);
    }

    #[test]
    fn trigger_overrides_individual_matches() {
        let registry = ProjectRegistry::new(["etcd-io/etcd", "coredns/coredns"]);
        let changed = paths(&["projects/etcd-io/etcd/server.go", "Makefile"]);
        let selection = classify(&changed, &registry, &GlobalTriggerRule::standard());
        assert_eq!(selection, Selection::All);
    }

    #[test]
    fn subset_preserves_registry_order() {
        let registry = ProjectRegistry::new(["b/b", "a/a", "c/c"]);
        let changed = paths(&["projects/c/c/x", "projects/a/a/y", "projects/b/b/z"]);
        let selection = classify(&changed, &registry, &GlobalTriggerRule::standard());
        assert_eq!(
            selection,
            Selection::Subset(vec!["a/a".into(), "b/b".into(), "c/c".into()])
        );
    }

    #[test]
    fn duplicate_changed_paths_select_once() {
        let registry = ProjectRegistry::new(["coredns/coredns"]);
        let changed = paths(&["projects/coredns/coredns/a.go", "projects/coredns/coredns/a.go"]);
        let selection = classify(&changed, &registry, &GlobalTriggerRule::standard());
        assert_eq!(selection, Selection::Subset(vec!["coredns/coredns".into()]));
    }
}
