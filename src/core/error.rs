use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid dice format: {0:?}")]
    InvalidDiceFormat(String),

    #[error("Attack index {index} out of range (1..={total})")]
    AttackIndexOutOfRange { index: u32, total: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Scenario parse failure; a malformed dice string keeps its own kind
    pub fn from_scenario_toml(err: toml::de::Error) -> Self {
        match err.message().strip_prefix("Invalid dice format: ") {
            Some(quoted) => {
                tracing::debug!(error = %err, "dice descriptor rejected in scenario");
                SimError::InvalidDiceFormat(quoted.trim_matches('"').to_string())
            }
            None => SimError::Toml(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
