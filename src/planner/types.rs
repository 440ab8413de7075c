use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid rotation config: {0}")]
    InvalidConfig(String),
    #[error("invalid window: from must be strictly before until")]
    InvalidWindow,
    #[error("invalid override for user {0}: end must be after start")]
    InvalidOverride(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
