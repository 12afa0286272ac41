use crate::service::LinkService;

/// Shared application context, built once at startup and cloned into every
/// request handler. Both fields are read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub links: LinkService,
    pub base_url: String,
}

impl AppState {
    pub fn new(links: LinkService, base_url: String) -> Self {
        Self { links, base_url }
    }
}
