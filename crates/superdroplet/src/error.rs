/// Errors surfaced by the superdroplet core and its configuration layer.
///
/// Contract violations inside the resolver (a zero multiplicity reaching
/// the division) are not represented here; they panic.
#[derive(Debug, thiserror::Error)]
pub enum SuperdropletError {
    /// The population cannot enter a collision step.
    #[error("invalid population: {reason}")]
    InvalidPopulation { reason: String },

    /// No initial-condition case with this name.
    #[error("didn't understand case '{0}'")]
    UnknownCase(String),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SuperdropletError {
    pub(crate) fn invalid_population(reason: impl Into<String>) -> Self {
        Self::InvalidPopulation {
            reason: reason.into(),
        }
    }
}
