//! Registry of tracked vendored projects.

/// The vendored projects tracked by postsubmit, as `org/repo` path
/// fragments relative to the repository's `projects/` directory.
const STANDARD_PROJECTS: &[&str] = &[
    "containernetworking/plugins",
    "coredns/coredns",
    "etcd-io/etcd",
    "kubernetes-csi/external-attacher",
    "kubernetes-csi/external-provisioner",
    "kubernetes-csi/external-resizer",
    "kubernetes-csi/external-snapshotter",
    "kubernetes-csi/livenessprobe",
    "kubernetes-csi/node-driver-registrar",
    "kubernetes-sigs/aws-iam-authenticator",
    "kubernetes-sigs/metrics-server",
    "kubernetes/kubernetes",
    "kubernetes/release",
];

/// Fixed set of tracked project identifiers.
///
/// The identifier list is sorted and deduplicated at construction and
/// never changes during a run, so build order (and log output) is
/// reproducible.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    identifiers: Vec<String>,
}

impl ProjectRegistry {
    /// Creates a registry from the given identifiers, sorted and deduplicated.
    #[must_use]
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();
        identifiers.sort();
        identifiers.dedup();
        Self { identifiers }
    }

    /// The standard registry of vendored projects built by this pipeline.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_PROJECTS.iter().copied())
    }

    /// The tracked identifiers, in sorted order.
    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectRegistry;

    #[test]
    fn standard_registry_is_sorted() {
        let registry = ProjectRegistry::standard();
        let ids = registry.identifiers();
        assert_eq!(ids.len(), 13);
        let mut sorted = ids.to_vec();
        sorted.sort();
        assert_eq!(ids, sorted.as_slice());
    }

    #[test]
    fn new_sorts_and_dedupes() {
        let registry = ProjectRegistry::new(["b/b", "a/a", "b/b"]);
        assert_eq!(registry.identifiers(), ["a/a", "b/b"]);
    }
}
