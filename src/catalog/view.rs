use crate::catalog::{CatalogLoader, Page};
use crate::render::{render_detail, render_list, NOT_FOUND};
use crate::search::{find_device, DeviceSearch};
use crate::{Config, Device};
use eyre::Result;
use std::collections::VecDeque;

/// Shown in the listing container when the catalog could not be loaded.
pub const LOAD_ERROR: &str = r#"<p class="error">Could not load devices.</p>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle of the catalog.
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
/// Owns the loaded catalog and renders it into a host page.
///
/// The device list is set once, when loading completes, and only read
/// afterwards. Detail requests made before that are queued and replayed in
/// order once the catalog is ready; they are dropped if loading fails.
pub struct CatalogView {
    config: Config,
    page: Page,
    state: LoadState,
    devices: Vec<Device>,
    pending: VecDeque<String>,
}

impl CatalogView {
    pub fn new(config: Config, page: Page) -> Self {
        CatalogView {
            config,
            page,
            state: LoadState::Uninitialized,
            devices: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The loaded catalog, empty until loading succeeds.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Detail requests waiting for the catalog.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    /// Loads the catalog once. Later calls do nothing.
    pub async fn load(&mut self, loader: &CatalogLoader) {
        if self.state != LoadState::Uninitialized {
            tracing::debug!(state = ?self.state, "catalog load already started");
            return;
        }
        self.begin_load();
        let result = loader.fetch().await;
        self.complete_load(result);
    }

    /// Marks the catalog as loading.
    pub fn begin_load(&mut self) {
        if self.state == LoadState::Uninitialized {
            self.state = LoadState::Loading;
        }
    }

    /// Settles the load with its outcome.
    ///
    /// On success the full list is rendered and queued detail requests are
    /// replayed. On failure the listing shows an error and the queue is
    /// dropped. Has no effect once the catalog is ready or failed.
    pub fn complete_load(&mut self, result: Result<Vec<Device>>) {
        if matches!(self.state, LoadState::Ready | LoadState::Failed) {
            tracing::warn!(state = ?self.state, "ignoring second catalog load");
            return;
        }

        match result {
            Ok(devices) => {
                tracing::info!(devices = devices.len(), "catalog loaded");
                self.devices = devices;
                self.state = LoadState::Ready;

                if let Some(list) = self.page.list.as_mut() {
                    list.replace(render_list(&self.devices, &self.config));
                }

                let pending = std::mem::take(&mut self.pending);
                tracing::debug!(replayed = pending.len(), "replaying detail requests");
                for key in pending {
                    self.show_detail(&key);
                }
            }
            Err(err) => {
                tracing::warn!(error = ?err, "catalog could not be loaded");
                self.state = LoadState::Failed;

                if let Some(list) = self.page.list.as_mut() {
                    list.replace(LOAD_ERROR.into());
                }

                let dropped = self.pending.len();
                self.pending.clear();
                tracing::debug!(dropped, "dropped detail requests");
            }
        }
    }

    /// Re-renders the grid with the devices matching `query`.
    ///
    /// Only acts on a ready catalog shown on a page with a search input.
    pub fn search(&mut self, query: &str) {
        if self.state != LoadState::Ready || !self.page.search_input {
            return;
        }
        let Some(list) = self.page.list.as_mut() else {
            return;
        };

        let search = DeviceSearch::search(&self.devices, query);
        list.replace(render_list(search.results, &self.config));
    }

    /// Renders the device identified by `key` into the detail container.
    ///
    /// Before the catalog is ready the request is queued; after a failed
    /// load it is ignored.
    pub fn render_detail(&mut self, key: &str) {
        match self.state {
            LoadState::Uninitialized | LoadState::Loading => {
                tracing::debug!(key, "queueing detail request");
                self.pending.push_back(key.into());
            }
            LoadState::Ready => self.show_detail(key),
            LoadState::Failed => {
                tracing::debug!(key, "catalog unavailable, ignoring detail request");
            }
        }
    }

    fn show_detail(&mut self, key: &str) {
        let Some(container) = self.page.detail.as_mut() else {
            return;
        };

        let html = match find_device(&self.devices, key) {
            Some(device) => render_detail(device, &self.config),
            None => {
                tracing::warn!(key, "device not found");
                NOT_FOUND.into()
            }
        };
        container.replace(html);
    }
}
