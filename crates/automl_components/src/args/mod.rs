//! Command-line argument marshalling for container components.
//!
//! Components translate their typed inputs into a flat `--flag=value`
//! argument list consumed by an external container's argument parser.
//!
//! # Architecture
//!
//! - **value**: typed values and their pinned string encodings
//! - **builder**: per-field emit policies and ordered list assembly

mod builder;
mod value;

pub use builder::{format_args_pretty, ArgField, ArgListBuilder, EmitPolicy};
pub use value::ArgValue;
