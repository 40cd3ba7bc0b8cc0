//! Shared application state for all routes.

use crate::store::MaintainerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MaintainerStore>,
}

impl AppState {
    pub fn new(store: impl MaintainerStore + 'static) -> Self {
        AppState { store: Arc::new(store) }
    }
}
