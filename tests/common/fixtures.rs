//! Shared fixture content.

/// Minimal configuration with a single `dev` environment
pub const ACME_CONFIG: &str = r#"projectName: acme
language: go
kubernetesContexts:
  dev: --context dev --namespace default
versionControl:
  provider: github
  nameSpace: acme-team
  repository: acme
"#;

/// Manifest template stamped with commit and timestamp
pub const ACME_TEMPLATE: &str = "image: x@${COMMIT}\ndeployed: ${TIMESTAMP}";

/// Commit reported by the fake git
pub const ACME_COMMIT: &str = "abc123";

/// Connection string of the `dev` environment
pub const DEV_CONNECTION: &str = "--context dev --namespace default";
