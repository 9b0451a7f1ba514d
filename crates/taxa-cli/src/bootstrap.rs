use std::path::Path;

use anyhow::Context;
use taxa_config::TaxaConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, honouring `--config` when given.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TaxaConfig> {
    let explicit = flags.config.as_deref().map(Path::new);
    TaxaConfig::load_with_dotenv(explicit).with_context(|| match explicit {
        Some(path) => format!("failed to load configuration (with {})", path.display()),
        None => "failed to load configuration".to_string(),
    })
}
