// ============================================================================
// Tracker Configuration
// ============================================================================
//
// Plain typed settings with defaults. Nothing is read from the environment
// or from files; a session is configured entirely in code.
//
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    /// Download name prefix, followed by `-YYYY-MM-DD`
    pub file_prefix: String,
    pub file_extension: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: "pengiriman".to_string(),
            file_extension: "csv".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Load the two sample shipments when the session starts
    pub seed_sample_data: bool,
    pub export: ExportConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            export: ExportConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Start with an empty store
    pub fn empty() -> Self {
        Self {
            seed_sample_data: false,
            ..Self::default()
        }
    }
}
