// Portal settings model

use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// User-facing portal settings, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalSettings {
    /// Display language for labels and catalog data.
    pub locale: Locale,
    /// Seconds between countdown recomputations.
    pub tick_interval_secs: u64,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            tick_interval_secs: default_tick_interval_secs(),
        }
    }
}

fn default_tick_interval_secs() -> u64 {
    1
}
