//! Data models shared across components.
//!
//! - Artifact references and step bindings (URIs only, contents opaque)
//! - The container step descriptor handed to the orchestration engine

mod artifacts;
mod step;

pub use artifacts::{ArtifactBinding, ArtifactDirection, ArtifactRef};
pub use step::ContainerStep;
