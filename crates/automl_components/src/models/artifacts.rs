//! Artifact references passed between pipeline steps.

use serde::{Deserialize, Serialize};

/// An opaque handle to externally stored data, identified by URI.
///
/// Components never read or write artifact contents; URIs are passed to
/// the external container as plain strings and the orchestration engine
/// wires them before execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    /// Logical artifact name within the step (e.g. "dataset_stats").
    pub name: String,
    /// Storage URI (e.g. "gs://bucket/path/stats").
    pub uri: String,
}

impl ArtifactRef {
    /// Create a new artifact reference.
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
        }
    }
}

/// Direction of an artifact binding on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactDirection {
    /// Read by the external container.
    Input,
    /// Written by the external container.
    Output,
}

/// One declared artifact binding on a step descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactBinding {
    /// Logical artifact name.
    pub name: String,
    /// Storage URI.
    pub uri: String,
    /// Whether the container reads or writes this artifact.
    pub direction: ArtifactDirection,
}

impl ArtifactBinding {
    /// Declare an input binding for the given artifact.
    pub fn input(artifact: &ArtifactRef) -> Self {
        Self {
            name: artifact.name.clone(),
            uri: artifact.uri.clone(),
            direction: ArtifactDirection::Input,
        }
    }

    /// Declare an output binding for the given artifact.
    pub fn output(artifact: &ArtifactRef) -> Self {
        Self {
            name: artifact.name.clone(),
            uri: artifact.uri.clone(),
            direction: ArtifactDirection::Output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_copies_artifact_fields() {
        let artifact = ArtifactRef::new("metadata", "gs://bucket/metadata");
        let binding = ArtifactBinding::output(&artifact);
        assert_eq!(binding.name, "metadata");
        assert_eq!(binding.uri, "gs://bucket/metadata");
        assert_eq!(binding.direction, ArtifactDirection::Output);
    }

    #[test]
    fn direction_serializes_lowercase() {
        let json = serde_json::to_string(&ArtifactDirection::Input).unwrap();
        assert_eq!(json, "\"input\"");
    }
}
