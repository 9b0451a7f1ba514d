use schemars::{Schema, schema_for};
use taxa_core::responses::ListEntry;
use taxa_core::{Species, SpeciesType};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::output::output;

/// Handle `taxa schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.target), flags.format)
}

fn schema(target: SchemaTarget) -> Schema {
    match target {
        SchemaTarget::Species => schema_for!(Species),
        SchemaTarget::ListEntry => schema_for!(ListEntry),
        SchemaTarget::SpeciesType => schema_for!(SpeciesType),
    }
}
