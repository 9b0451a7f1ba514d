use std::io;

use taxa_config::TaxaConfig;
use taxa_core::Catalog;

use crate::cli::GlobalFlags;
use crate::session::{Session, SessionOptions};

/// Handle `taxa` / `taxa menu`: run the interactive session on stdin/stdout.
pub fn handle(config: &TaxaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = Catalog::with_capacity(config.catalog.capacity);
    tracing::debug!(capacity = catalog.capacity(), "starting menu session");

    let options = SessionOptions {
        format: flags.format,
        show_banner: config.general.show_banner,
    };

    let stdin = io::stdin();
    let mut session = Session::new(catalog, stdin.lock(), io::stdout().lock(), options);
    session.run()?;

    tracing::debug!(species = session.catalog().len(), "menu session finished");
    Ok(())
}
