use crate::{repositories, util::validate::SubmissionInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please enter the pizzeria name")]
    Name,
    #[error("Please enter the address")]
    Address,
    #[error("Please select a pizza style")]
    Category,
    #[error("Please enter a valid email address")]
    ContactEmail,
    #[error("This address appears to be outside the {0} area. Please check the address.")]
    OutOfRegion(&'static str),
    #[error("No pizzeria ID provided")]
    MissingId,
    /// Writing the place failed; holds the message shown to the user.
    #[error("{0}")]
    Persistence(String),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Rejected locally without touching the network.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::Address
                | Self::Category
                | Self::ContactEmail
                | Self::OutOfRegion(_)
                | Self::MissingId
        )
    }
}

impl From<SubmissionInvalidation> for Error {
    fn from(err: SubmissionInvalidation) -> Self {
        match err {
            SubmissionInvalidation::Name => Self::Name,
            SubmissionInvalidation::Address => Self::Address,
            SubmissionInvalidation::Category => Self::Category,
            SubmissionInvalidation::ContactEmail => Self::ContactEmail,
        }
    }
}
