//! Pipeline component definitions.
//!
//! Each component packages one container invocation: a fixed image, the
//! marshalled argument list, and declared artifact bindings.

use thiserror::Error;

mod training_configurator;

pub use training_configurator::{
    ConfiguratorArtifacts, ConfiguratorParams, TrainingConfiguratorAndValidator,
    CONFIGURATOR_IMAGE, CONFIGURATOR_SUBCOMMAND,
};

/// Construction-time errors for component descriptors.
///
/// These are caller configuration mistakes caught before anything reaches
/// the orchestration engine. Failures of the external container itself are
/// reported by the engine, not translated here.
#[derive(Error, Debug)]
pub enum ComponentError {
    /// An artifact reference was supplied without a URI.
    #[error("Artifact '{artifact}' has an empty URI")]
    EmptyArtifactUri { artifact: String },
}
