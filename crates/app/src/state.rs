use std::sync::Arc;

use tgcloud_config::HostContext;
use tgcloud_core::StorageApi;
use tgcloud_models::{UiState, ViewState};

pub struct App {
    pub view: ViewState,
    pub ui: UiState,
    pub host: HostContext,
    pub should_quit: bool,
    pub(crate) api: Arc<dyn StorageApi>,
}

impl App {
    /// Creates the view in its loading state. Nothing is fetched until
    /// [`App::bootstrap`] runs.
    #[must_use]
    pub fn new(api: Arc<dyn StorageApi>, host: HostContext) -> Self {
        Self {
            view: ViewState::new(),
            ui: UiState::default(),
            host,
            should_quit: false,
            api,
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.ui.alert = None;
    }
}
