use crate::*;
use std::cell::{Ref, RefCell, RefMut};

/// Everything a session holds on to: the backend
/// connections and the view state.
#[derive(Debug)]
pub struct AppState<B, G> {
    backend: B,
    geocoder: G,
    region: Region,
    store: RefCell<ViewStore>,
}

impl<B, G> AppState<B, G> {
    pub fn new(backend: B, geocoder: G, region: Region) -> Self {
        Self {
            backend,
            geocoder,
            region,
            store: RefCell::new(ViewStore::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Read access for rendering.
    pub fn store(&self) -> Ref<'_, ViewStore> {
        self.store.borrow()
    }

    pub(crate) fn store_cell(&self) -> &RefCell<ViewStore> {
        &self.store
    }

    /// Selection and filter changes.
    pub fn store_mut(&self) -> RefMut<'_, ViewStore> {
        self.store.borrow_mut()
    }
}
