//! Container step descriptor consumed by the orchestration engine.

use serde::{Deserialize, Serialize};

use super::artifacts::ArtifactBinding;

/// A declarative container execution step.
///
/// Packages a fixed container image reference, the marshalled argument
/// list, and the declared artifact bindings. Producing this value has no
/// side effects: execution, retries, and failure reporting belong entirely
/// to the surrounding orchestration engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerStep {
    /// Step name within the pipeline graph.
    pub name: String,
    /// Versioned container image reference.
    pub image: String,
    /// Entrypoint override. Empty means the image default entrypoint,
    /// with all invocation detail carried by `args`.
    #[serde(default)]
    pub command: Vec<String>,
    /// Ordered process invocation arguments.
    pub args: Vec<String>,
    /// Input artifact bindings (read by the container).
    #[serde(default)]
    pub inputs: Vec<ArtifactBinding>,
    /// Output artifact bindings (written by the container).
    #[serde(default)]
    pub outputs: Vec<ArtifactBinding>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtifactBinding, ArtifactRef};

    #[test]
    fn step_serializes_round_trip() {
        let artifact = ArtifactRef::new("stats", "gs://bucket/stats");
        let step = ContainerStep {
            name: "configure".to_string(),
            image: "example.dev/image:v1".to_string(),
            command: vec![],
            args: vec!["subcmd".to_string(), "--flag=value".to_string()],
            inputs: vec![ArtifactBinding::input(&artifact)],
            outputs: vec![],
        };

        let json = serde_json::to_string(&step).unwrap();
        let parsed: ContainerStep = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, step);
    }
}
