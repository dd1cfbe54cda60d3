//! Service identity and catalogue facts
//!
//! Reported by the startup banner, the status tool and the MCP handshake.

use serde::Serialize;

use crate::config::ServerConfig;
use crate::data::{ABV_SUGGESTIONS, REFERENCE_BATCHES};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

pub const DISPLAY_NAME: &str = "Freezer Batch Calculator";

/// What this server can calculate and with which defaults
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub reference_recipes: usize,
    pub abv_suggestions: usize,
    pub default_bottle_ml: f64,
    pub default_dilution_percent: f64,
}

impl ServiceInfo {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            name: NAME,
            version: VERSION,
            reference_recipes: REFERENCE_BATCHES.len(),
            abv_suggestions: ABV_SUGGESTIONS.len(),
            default_bottle_ml: config.default_bottle_ml,
            default_dilution_percent: config.default_dilution_percent,
        }
    }

    /// Banner lines, without the rule above and below
    pub fn banner_lines(&self) -> [String; 3] {
        [
            format!("  {} v{}", DISPLAY_NAME, self.version),
            format!(
                "  Catalogue: {} reference batches, {} ABV hints",
                self.reference_recipes, self.abv_suggestions
            ),
            format!(
                "  Defaults: {} ml bottle, {}% dilution",
                self.default_bottle_ml, self.default_dilution_percent
            ),
        ]
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner(config: &ServerConfig) {
    eprintln!("===============================================");
    for line in ServiceInfo::new(config).banner_lines() {
        eprintln!("{}", line);
    }
    eprintln!("===============================================");
}
