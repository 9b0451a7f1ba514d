//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_show_banner() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Print the welcome and farewell lines around the menu.
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,

    /// Tracing filter used when neither `TAXA_LOG` nor `--quiet`/`--verbose` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_banner: default_show_banner(),
            log_level: default_log_level(),
        }
    }
}
