use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Remote(#[from] evespy::error::RemoteError),
    #[error(transparent)]
    Resolution(#[from] evespy::error::ResolutionError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
