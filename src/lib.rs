//! spatial-fixtures
//!
//! Random geometry values for populating spatial test fixtures.
//!
//! The generators and the field registry live in the `spatial-generator`
//! crate and the value and schema types in `spatial-core`; this crate holds
//! the command-line front end:
//!
//! - `fields` - List the registered geometry field types
//! - `generate` - Emit values for one field type as GeoJSON or EWKT
//! - `make` - Populate rows for a model described in a YAML fixture schema

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, GenerateArgs, MakeArgs, OutputFormat};
