use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenalignError {
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Ragged individual: gene '{title}' has length {found}, expected {expected}")]
    RaggedIndividual {
        expected: usize,
        found: usize,
        title: String,
    },

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, GenalignError>;
