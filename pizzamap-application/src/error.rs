use pizzamap_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error("A submission is already in progress")]
    Busy,
    #[error("This submission has already been completed")]
    Completed,
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl AppError {
    /// Whether the user can fix the problem by changing the input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Business(BError::Parameter(err)) if err.is_validation())
    }
}
