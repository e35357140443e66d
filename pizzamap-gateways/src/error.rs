use pizzamap_core::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),
    #[error("{}", .0.message.as_deref().unwrap_or("The backend rejected the request"))]
    Api(pizzamap_boundary::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("The backend did not return the id of the new record")]
    MissingId,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<Error> for repositories::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(err) => {
                log::debug!(
                    "Backend error (code: {:?}, details: {:?}, hint: {:?})",
                    err.code,
                    err.details,
                    err.hint
                );
                Self::Backend {
                    message: err.message,
                }
            }
            err => Self::Other(err.into()),
        }
    }
}
