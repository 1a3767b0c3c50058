use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::gallery::cache::LayoutCache;
use crate::gallery::params::LayoutParams;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Validated layout constants, fixed for the process lifetime.
    pub layout_params: LayoutParams,
    /// Computed layouts keyed by artwork list; shared by every request.
    pub layout_cache: Arc<LayoutCache>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let layout_params = config.layout_params()?;
        let layout_cache = Arc::new(LayoutCache::new(config.layout_cache_size));
        Ok(AppState {
            config,
            layout_params,
            layout_cache,
        })
    }
}
