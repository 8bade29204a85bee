//! Declarative pipeline components for AutoML tabular training.
//!
//! This crate defines pipeline step descriptors consumed by an external
//! orchestration engine. Components here never execute anything themselves:
//! they marshal typed inputs into the command-line contract of a fixed,
//! versioned container image and declare the artifact bindings the engine
//! wires before execution.

pub mod args;
pub mod components;
pub mod config;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
