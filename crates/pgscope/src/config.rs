/// Configuration for the condition helpers.
///
/// Defaults match the common case: comma-delimited list columns and
/// case-sensitive `LIKE` matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeConfig {
    /// Separator used by delimited-list columns (`a,b,c`).
    pub delimiter: char,
    /// Use `ILIKE` / `NOT ILIKE` instead of `LIKE` / `NOT LIKE`.
    pub case_insensitive: bool,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            case_insensitive: false,
        }
    }
}

impl ScopeConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimited-list separator.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Match patterns case-insensitively (`ILIKE`).
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Match patterns case-sensitively (`LIKE`, default).
    pub fn case_sensitive(mut self) -> Self {
        self.case_insensitive = false;
        self
    }
}
