use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Default, Subcommand)]
pub enum Commands {
    /// Run the interactive species menu (default).
    #[default]
    Menu,
    /// Print the JSON Schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type to describe.
    #[arg(value_enum, default_value = "species")]
    pub target: SchemaTarget,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Species,
    ListEntry,
    SpeciesType,
}
