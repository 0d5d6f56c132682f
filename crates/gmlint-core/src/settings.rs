//
// Adapted from Air
// https://github.com/posit-dev/air/blob/main/crates/workspace/src/settings.rs
//
// MIT License - Posit PBC

/// Resolved configuration settings used within gmlint
#[derive(Debug, Default)]
pub struct Settings {
    pub linter: LinterSettings,
}

#[derive(Debug)]
pub struct LinterSettings {
    pub select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub default_exclude: Option<bool>,
}

impl Default for LinterSettings {
    /// [Default] handler for [LinterSettings]
    ///
    /// Uses `None` to indicate no rules specified, rather than empty vectors.
    fn default() -> Self {
        Self {
            select: None,
            ignore: None,
            exclude: None,
            default_exclude: None,
        }
    }
}
