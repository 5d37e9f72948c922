//! Shared application state for all routes.

use crate::store::MobileStore;

/// Built once at startup and handed to every handler; the only thing it carries is the store handle.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: MobileStore,
}

impl AppState {
    pub fn new(store: MobileStore) -> Self {
        AppState { store }
    }
}
