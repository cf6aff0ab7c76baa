use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("config error: {0}")]
    Config(String),
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
