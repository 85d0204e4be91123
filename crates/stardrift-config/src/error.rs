//! Failure modes of `config.ron` persistence.

/// What can go wrong reading, writing, or decoding the settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("could not read config.ron: {0}")]
    Read(#[source] std::io::Error),

    /// The settings file or its directory could not be written.
    #[error("could not write config.ron: {0}")]
    Write(#[source] std::io::Error),

    /// The settings file is not valid RON for the current schema.
    #[error("config.ron is not valid RON: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The in-memory settings could not be rendered as RON.
    #[error("could not serialize settings to RON: {0}")]
    Serialize(#[source] ron::Error),
}
