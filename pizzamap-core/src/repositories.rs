// Backend access traits.
// Each repository is responsible for a single collection.
// Related records are only referenced by their id.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("{}", .message.as_deref().unwrap_or("The backend rejected the request"))]
    Backend { message: Option<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// The message reported by the backend, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[allow(async_fn_in_trait)]
pub trait PlaceRepo {
    /// All places including their joined category links.
    async fn all_places(&self) -> Result<Vec<Place>>;

    async fn create_place(&self, place: &PlaceFields) -> Result<Id>;

    async fn update_place(&self, id: &Id, place: &PlaceFields, updated_at: Timestamp)
        -> Result<()>;
}

#[allow(async_fn_in_trait)]
pub trait CategoryRepo {
    /// All categories ordered by name.
    async fn all_categories(&self) -> Result<Vec<Category>>;
}

#[allow(async_fn_in_trait)]
pub trait CategoryLinkRepo {
    /// Link a place with its primary category.
    async fn create_category_link(&self, place_id: &Id, category_id: &Id) -> Result<()>;

    async fn delete_category_links(&self, place_id: &Id) -> Result<()>;
}
