use taxa_config::TaxaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &TaxaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Menu => commands::menu::handle(config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
