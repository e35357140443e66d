use crate::{state::AppState, *};
use std::cell::RefCell;

/// Fetch places and categories concurrently.
///
/// The store either receives both collections or
/// records the failure without touching its data.
pub async fn load_places<B>(backend: &B, store: &RefCell<ViewStore>) -> Result<()>
where
    B: PlaceRepo + CategoryRepo,
{
    store.borrow_mut().set_loading();
    match tokio::try_join!(backend.all_places(), backend.all_categories()) {
        Ok((places, categories)) => {
            info!(
                "Loaded {} places and {} categories",
                places.len(),
                categories.len()
            );
            store.borrow_mut().set_collections(places, categories);
            Ok(())
        }
        Err(err) => {
            error!("Failed to load places: {err}");
            store.borrow_mut().set_failed(err.to_string());
            Err(err.into())
        }
    }
}

impl<B, G> AppState<B, G>
where
    B: PlaceRepo + CategoryRepo,
{
    pub async fn load(&self) -> Result<()> {
        load_places(self.backend(), self.store_cell()).await
    }

    /// Replace the view state with the current backend data.
    pub async fn reload(&self) -> Result<()> {
        debug!("Reloading places");
        self.load().await
    }
}
