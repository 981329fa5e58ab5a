use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("unknown profile '{0}': valid values are beginner, intermediate, advanced")]
    InvalidProfile(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, GuideError>;
