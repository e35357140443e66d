use crate::usecases::SubmitPlace;
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

/// The reasons a submission is rejected before it leaves the form.
///
/// The checks run in declaration order and stop at the first failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionInvalidation {
    #[error("Please enter the pizzeria name")]
    Name,
    #[error("Please enter the address")]
    Address,
    #[error("Please select a pizza style")]
    Category,
    #[error("Please enter a valid email address")]
    ContactEmail,
}

impl Validate for SubmitPlace {
    type Error = SubmissionInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.address.trim().is_empty() {
            return Err(Self::Error::Address);
        }
        if !self.category_id.as_ref().is_some_and(|id| id.is_valid()) {
            return Err(Self::Error::Category);
        }
        let email = self.contact_email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            return Err(Self::Error::ContactEmail);
        }
        Ok(())
    }
}

impl AutoCorrect for SubmitPlace {
    fn auto_correct(self) -> Self {
        let trim = |s: String| s.trim().to_string();
        Self {
            id: self.id.filter(|id| id.is_valid()),
            name: trim(self.name),
            address: trim(self.address),
            map_url: trim(self.map_url),
            phone: trim(self.phone),
            website: trim(self.website),
            category_id: self.category_id.filter(|id| id.is_valid()),
            description: trim(self.description),
            contact_email: trim(self.contact_email),
        }
    }
}
